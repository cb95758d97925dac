//! Rendering of the generated `translators.rs` module.

use serde::Serialize;
use tera::Tera;

use crate::config::REGENERATE_COMMAND;
use crate::error::CodegenError;
use crate::translate::table::LookupTable;

const TEMPLATE_NAME: &str = "translators.rs.tera";

/// A table entry rendered as a pair of Rust string literals.
#[derive(Debug, Serialize)]
struct LiteralRow {
    id: String,
    name: String,
}

/// Template generator for the translators module.
pub struct TranslatorsTemplate {
    tera: Tera,
}

impl TranslatorsTemplate {
    /// Create a generator with the embedded translators template.
    pub fn new() -> Result<Self, CodegenError> {
        let mut tera = Tera::default();
        tera.add_raw_template(
            TEMPLATE_NAME,
            include_str!("../templates/translators.rs.tera"),
        )?;

        Ok(Self { tera })
    }

    /// Render both tables into the module source.
    pub fn render(
        &self,
        vehicles: &LookupTable,
        loadouts: &LookupTable,
    ) -> Result<String, CodegenError> {
        let mut context = tera::Context::new();
        context.insert("regenerate_command", REGENERATE_COMMAND);
        context.insert("vehicles", &literal_rows(vehicles));
        context.insert("loadouts", &literal_rows(loadouts));

        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

fn literal_rows(table: &LookupTable) -> Vec<LiteralRow> {
    table
        .entries()
        .iter()
        .map(|entry| LiteralRow {
            id: rust_str_literal(&entry.id),
            name: rust_str_literal(&entry.name),
        })
        .collect()
}

/// `Debug` for `str` produces a valid, escaped Rust string literal.
fn rust_str_literal(value: &str) -> String {
    format!("{value:?}")
}
