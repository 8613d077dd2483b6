pub mod parse_journal;
