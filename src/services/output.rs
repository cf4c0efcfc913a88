use crate::domain::models::JsonOut;
use serde::Serialize;

/// Pretty JSON envelope on `--json`, otherwise the rendered text lines.
pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    render: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for line in render(&data) {
            println!("{}", line);
        }
    }
    Ok(())
}
