use std::io;

use log::{
    Record,
    kv::{Error, Key, Value, VisitSource},
};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::encode::{Color, Encode, Style, Write};
use serde::Deserialize;

const DEFAULT_PATTERN: &str = "{d} {l} {m}";

#[derive(Debug, Deserialize)]
pub struct KvConsoleEncoderConfig {
    pub pattern: Option<String>,
}

/// Pattern encoder that appends the record's key-value pairs as ` key=value`.
///
/// Values containing whitespace or quotes are written as quoted strings so a
/// path like `./my docs/swagger.json` stays one field.
#[derive(Debug)]
pub struct KvConsoleEncoder {
    pattern: PatternEncoder,
}

impl KvConsoleEncoder {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: PatternEncoder::new(pattern),
        }
    }
}

impl Default for KvConsoleEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

impl Encode for KvConsoleEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record) -> anyhow::Result<()> {
        self.pattern.encode(w, record)?;

        let mut fields = FieldWriter { out: w, failure: None };
        if let Err(kv_err) = record.key_values().visit(&mut fields) {
            if let Some(io_err) = fields.failure {
                return Err(io_err.into());
            }
            write!(w, " [kv error: {kv_err}]")?;
        }

        w.write_all(b"\n")?;
        Ok(())
    }
}

struct FieldWriter<'a> {
    out: &'a mut dyn Write,
    failure: Option<io::Error>,
}

impl FieldWriter<'_> {
    fn write_field(&mut self, key: &Key<'_>, value: &Value<'_>) -> io::Result<()> {
        self.out.set_style(Style::new().text(Color::Cyan))?;
        write!(self.out, " {key}=")?;
        self.out.set_style(&Style::default())?;

        let rendered = value.to_string();
        if needs_quotes(&rendered) {
            write!(self.out, "{rendered:?}")
        } else {
            write!(self.out, "{rendered}")
        }
    }
}

impl<'kvs> VisitSource<'kvs> for FieldWriter<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), Error> {
        self.write_field(&key, &value).map_err(|e| {
            self.failure = Some(e);
            Error::msg("io error while writing log fields")
        })
    }
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '"' || c == '=')
}

pub struct KvConsoleEncoderDeserializer;

impl log4rs::config::Deserialize for KvConsoleEncoderDeserializer {
    type Trait = dyn Encode;
    type Config = KvConsoleEncoderConfig;

    fn deserialize(
        &self,
        config: KvConsoleEncoderConfig,
        _: &log4rs::config::Deserializers,
    ) -> anyhow::Result<Box<dyn Encode>> {
        let encoder = match config.pattern.as_deref() {
            Some(pattern) => KvConsoleEncoder::new(pattern),
            None => KvConsoleEncoder::default(),
        };
        Ok(Box::new(encoder))
    }
}
