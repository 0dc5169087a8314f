use crate::common::*;

#[doc = r#"
    Reads a TOML configuration file and deserializes it into the given type.

    Used for the server configuration and the selection snapshot.

    # Arguments
    * `file_path` - path of the TOML file

    # Returns
    * `Result<T, anyhow::Error>` - parsed structure on success

    # Errors
    - the file does not exist or cannot be read
    - the TOML content does not match the target structure
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    Reads a CSV export with a header row and deserializes every record.

    The record types carry `serde(rename)` attributes matching the source
    column names (`RBD`, `AGNO`/`ANIO`, ...), so the caller receives already
    normalized structures.

    # Arguments
    * `file_path` - path of the CSV file

    # Returns
    * `Result<Vec<T>, anyhow::Error>` - all records on success

    # Errors
    - the file does not exist or cannot be read
    - a row cannot be deserialized into `T`
"#]
pub fn read_csv_from_file<T: DeserializeOwned>(file_path: &str) -> Result<Vec<T>, anyhow::Error> {
    let mut reader: csv::Reader<fs::File> = csv::Reader::from_path(file_path).map_err(|e| {
        anyhow!(
            "[io_utils->read_csv_from_file] Failed to open '{}': {:?}",
            file_path,
            e
        )
    })?;

    let mut records: Vec<T> = Vec::new();

    for row in reader.deserialize::<T>() {
        let record: T = row.map_err(|e| {
            anyhow!(
                "[io_utils->read_csv_from_file] Invalid row in '{}': {:?}",
                file_path,
                e
            )
        })?;
        records.push(record);
    }

    Ok(records)
}
