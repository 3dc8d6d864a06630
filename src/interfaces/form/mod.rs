pub mod callback_reader;
