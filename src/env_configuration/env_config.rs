use crate::common::*;

#[doc = r#"
    Reads an environment variable and treats a missing value as a fatal error.

    Every required path of the application (dataset locations, selection
    snapshot, HTML template) is supplied through the environment, so a missing
    key means the program cannot run at all.

    # Arguments
    * `key` - environment variable name

    # Returns
    * `String` - environment variable value

    # Panics
    When the environment variable is not set.
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    Path of the server configuration file (TOML).

    The file holds the dataset CSV locations and the report output settings,
    deserialized into `TotalConfig`. Initialized lazily on first access.
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

#[doc = r#"
    Path of the selection snapshot file (TOML).

    The snapshot lists the chosen institution codes (the `[TOTAL]` sentinel
    included), the chosen categories, and the chosen years per category. It is
    read once per generation run; there is no reactive recomputation.
"#]
pub static SELECTION_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SELECTION_PATH"));

#[doc = r#"
    Path of the HTML report template.

    The template defines the report layout and carries `{placeholder}` tokens
    that the template service replaces with the generated sections.
"#]
pub static HTML_TEMPLATE_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("HTML_TEMPLATE_PATH"));
