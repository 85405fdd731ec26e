use daa_core::prelude::GenericError;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// Writes any serializable result as pretty printed JSON.
pub fn write_json<T: Serialize, W: Write>(value: &T, writer: &mut BufWriter<W>) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(|err| format!("cannot write json: '{err}'"))?;
    writeln!(writer)?;

    Ok(())
}
