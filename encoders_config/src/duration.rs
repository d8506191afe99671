use std::ops::Deref;

use serde::Deserialize;

/// A duration written as whitespace separated parts like `"1s 500ms"`.
///
/// Supported units: `ms`, `s`, `m`, `h`, `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s)
            .map(Self)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid duration: {s:?}")))
    }
}

fn parse(s: &str) -> Option<std::time::Duration> {
    s.split_whitespace().try_fold(std::time::Duration::ZERO, |acc, part| {
        let split = part.find(|c: char| !c.is_ascii_digit())?;
        let (value, unit) = part.split_at(split);
        let value = value.parse::<u64>().ok()?;
        let part = match unit {
            "ms" => std::time::Duration::from_millis(value),
            "s" => std::time::Duration::from_secs(value),
            "m" => std::time::Duration::from_secs(value.checked_mul(60)?),
            "h" => std::time::Duration::from_secs(value.checked_mul(60 * 60)?),
            "d" => std::time::Duration::from_secs(value.checked_mul(24 * 60 * 60)?),
            _ => return None,
        };
        acc.checked_add(part)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("250ms", Some(250)),
            ("3s", Some(3_000)),
            ("2m", Some(2 * 60 * 1_000)),
            ("1h", Some(60 * 60 * 1_000)),
            ("1d", Some(24 * 60 * 60 * 1_000)),
            ("", Some(0)),
            ("1s 500ms", Some(1_500)),
            ("1d 2h 3m 4s", Some((((24 + 2) * 60 + 3) * 60 + 4) * 1_000)),
            ("xyz", None),
            ("5", None),
            ("s", None),
            ("7ss", None),
            ("-3s", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input)
                .ok()
                .map(|x| x.as_millis());
            assert_eq!(output, expected);
        }
    }
}
