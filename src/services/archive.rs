//! ZIP export of project files.

use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::domain::AppError;
use crate::domain::project::ProjectFile;

/// Pack the files into an in-memory deflated ZIP archive, in the given order.
pub fn build_archive(files: &[ProjectFile]) -> Result<Vec<u8>, AppError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        writer.start_file(file.name.as_str(), options)?;
        writer.write_all(file.content.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}
