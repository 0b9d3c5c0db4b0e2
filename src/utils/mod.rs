pub mod sentence_divider;
