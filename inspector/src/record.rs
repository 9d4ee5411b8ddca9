use std::collections::BTreeMap;

/// The parts of an in-toto link that inspections read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Step name, if the link carries one.
    pub name: Option<String>,
    /// Captured streams keyed by `stdout` / `stderr`. A key is absent when
    /// the link did not record that stream.
    pub byproducts: BTreeMap<String, String>,
    pub exit_code: i64,
}

impl Record {
    pub fn byproduct(&self, stream: &str) -> Option<&str> {
        self.byproducts.get(stream).map(String::as_str)
    }
}
