use std::{fs, io::ErrorKind, path::Path};

use serde_json::{Map, Number, json};

use crate::interpreter::{
    environment::Environment,
    value::{complex::ComplexNumber, core::Value},
};

/// Default file name for the interactive shell's persisted variables.
pub const SESSION_FILE: &str = "session.json";

/// Saves the user-created bindings of `env` to a JSON file.
///
/// Only bindings that differ from the seeded constant table are written;
/// untouched constants are re-seeded on load. Integers and reals become
/// JSON numbers, complex values a two-element `[real, imaginary]` array.
/// A real that JSON cannot represent (infinity, NaN) is skipped.
///
/// # Errors
/// Returns any I/O or serialization error.
pub fn save(path: &Path, env: &Environment) -> Result<(), Box<dyn std::error::Error>> {
    let mut object = Map::new();

    for (name, value) in env.user_entries() {
        let encoded = match value {
            Value::Integer(n) => json!(n),
            Value::Real(r) => match Number::from_f64(r) {
                Some(number) => serde_json::Value::Number(number),
                None => continue,
            },
            Value::Complex(c) => json!([c.real, c.imaginary]),
        };
        object.insert(name.to_string(), encoded);
    }

    let text = serde_json::to_string_pretty(&serde_json::Value::Object(object))?;
    fs::write(path, text)?;
    Ok(())
}

/// Loads a saved session into a freshly seeded environment.
///
/// A missing file is not an error: it yields a plain seeded environment,
/// so the first run of the shell starts clean. Entries the file contains
/// are applied on top of the constants, in file order.
///
/// # Errors
/// Returns I/O errors other than "not found" and JSON syntax errors.
pub fn load(path: &Path) -> Result<Environment, Box<dyn std::error::Error>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Environment::new()),
        Err(error) => return Err(error.into()),
    };

    let parsed: serde_json::Value = serde_json::from_str(&text)?;
    let Some(object) = parsed.as_object() else {
        return Err(format!("session file {} does not contain a JSON object", path.display()).into());
    };

    let mut bindings = Vec::new();
    for (name, encoded) in object {
        if let Some(value) = decode_value(encoded) {
            bindings.push((name.clone(), value));
        }
    }

    Ok(Environment::from_entries(bindings))
}

/// Decodes one persisted JSON value back into a runtime value.
///
/// Unknown shapes decode to `None` and are dropped rather than failing
/// the whole load.
fn decode_value(encoded: &serde_json::Value) -> Option<Value> {
    match encoded {
        serde_json::Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                Some(Value::Integer(n))
            } else {
                number.as_f64().map(Value::Real)
            }
        },
        serde_json::Value::Array(parts) if parts.len() == 2 => {
            let real = parts[0].as_f64()?;
            let imaginary = parts[1].as_f64()?;
            Some(Value::Complex(ComplexNumber::new(real, imaginary)))
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_temp_file() {
        let mut env = Environment::new();
        env.set("x", Value::Integer(42));
        env.set("y", Value::Real(2.5));
        env.set("z", Value::Complex(ComplexNumber::new(1.0, -2.0)));

        let path = std::env::temp_dir().join("numera-session-round-trip.json");
        save(&path, &env).unwrap();
        let loaded = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.get("x"), Some(Value::Integer(42)));
        assert_eq!(loaded.get("y"), Some(Value::Real(2.5)));
        assert_eq!(loaded.get("z"), Some(Value::Complex(ComplexNumber::new(1.0, -2.0))));
        assert_eq!(loaded.get("pi"), Some(Value::Real(std::f64::consts::PI)));
    }

    #[test]
    fn missing_file_yields_seeded_environment() {
        let path = std::env::temp_dir().join("numera-session-does-not-exist.json");
        let env = load(&path).unwrap();
        assert_eq!(env.user_entries().count(), 0);
        assert!(env.get("e").is_some());
    }
}
