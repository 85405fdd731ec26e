#[cfg(test)]
#[path = "../../../daa-core/tests/helpers/macros.rs"]
#[macro_use]
pub mod macros;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read};

pub fn get_test_resource(resource_path: &str) -> std::io::Result<File> {
    let mut path = std::env::current_dir()?;
    path.push("tests");
    path.push(resource_path);

    File::open(path)
}

pub fn get_data_reader(name: &str) -> BufReader<File> {
    BufReader::new(get_test_resource(format!("../../data/{name}").as_str()).expect("cannot open data file"))
}

pub fn get_data_string(name: &str) -> String {
    let mut buffer = String::new();
    get_data_reader(name).read_to_string(&mut buffer).expect("cannot read data file");

    buffer
}

/// Runs the writer function against an in-memory buffer and returns written text.
pub fn write_to_string<F>(write_fn: F) -> String
where
    F: FnOnce(&mut BufWriter<Vec<u8>>),
{
    let mut writer = BufWriter::new(Vec::new());
    write_fn(&mut writer);

    String::from_utf8(writer.into_inner().expect("cannot flush buffer")).expect("non utf8 output")
}
