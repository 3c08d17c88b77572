use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::models::Error;

/// Opens an input file for reading, decompressing on the fly when the path
/// ends in `.gz`. Large datasets are commonly shipped gzipped; the chunked
/// reader consumes either form identically.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>, Error> {
    let file = File::open(path)?;

    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}
