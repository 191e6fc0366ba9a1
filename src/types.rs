pub type SequenceNumber = i32;
