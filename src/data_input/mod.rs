// src/data_input/mod.rs

pub mod discovery;
pub mod flight_log;
pub mod sim_cmds;
pub mod sim_params;
pub mod targets;

/// Splits a whitespace-delimited line into exactly `N` tokens.
pub(crate) fn split_fields<const N: usize>(line: &str) -> Result<[&str; N], String> {
    let mut fields = [""; N];
    let mut count = 0;
    for token in line.split_whitespace() {
        if count < N {
            fields[count] = token;
        }
        count += 1;
    }
    if count != N {
        return Err(format!("expected {N} fields, found {count}"));
    }
    Ok(fields)
}

pub(crate) fn parse_f64_field(token: &str, name: &str) -> Result<f64, String> {
    token
        .parse::<f64>()
        .map_err(|e| format!("invalid {name} '{token}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_fields_accepts_mixed_whitespace() {
        let fields = split_fields::<4>("  0.0\t1.5   2 \t 90 ").unwrap();
        assert_eq!(fields, ["0.0", "1.5", "2", "90"]);
    }

    #[test]
    fn split_fields_rejects_wrong_count() {
        assert_eq!(
            split_fields::<4>("1 2 3").unwrap_err(),
            "expected 4 fields, found 3"
        );
        assert_eq!(
            split_fields::<4>("1 2 3 4 5").unwrap_err(),
            "expected 4 fields, found 5"
        );
    }

    #[test]
    fn parse_f64_field_names_the_field() {
        let err = parse_f64_field("abc", "x").unwrap_err();
        assert!(err.starts_with("invalid x 'abc'"));
        assert_eq!(parse_f64_field("-12.5", "y").unwrap(), -12.5);
    }
}

// src/data_input/mod.rs
