use std::env::temp_dir;
use std::fs::File;
use std::io::Write;

use pwsmith::CharacterClass;

#[allow(dead_code)]
pub(crate) fn write_string_to_tempfile(content: &str) -> String {
    let mut dir = temp_dir();
    let filename = format!("temp_file_{}.yml", rand::random::<u64>());

    dir.push(filename);

    let mut file = File::create(dir.clone()).expect("Failed to create tmp file");

    file.write_all(content.as_bytes())
        .expect("Failed to write into tmp file");

    dir.to_string_lossy().to_string()
}

pub(crate) fn count_class(password: &str, class: CharacterClass) -> usize {
    password.chars().filter(|&c| class.contains(c)).count()
}
