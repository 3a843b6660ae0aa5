
use crate::analysis::Analysis;
use crate::core::types::DataType;
use crate::logging::Logger;
use std::io::Cursor;

pub(super) fn analyse(input: &str, data_type: DataType) -> Analysis {
    Analysis::ingest(Cursor::new(input.as_bytes()), data_type, &Logger::new()).unwrap()
}
