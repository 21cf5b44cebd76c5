//! Exportación CSV de la evidencia
//!
//! CSV separado por `;`, líneas CRLF, todos los campos entre comillas
//! dobles (las comillas internas se duplican). Solo se exportan filas con
//! algún dato.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::DayRow;
use crate::services::row_edit_service::format_number;

pub const CSV_HEADER: [&str; 9] = [
    "Deň",
    "Tachometer začiatok",
    "Tachometer koniec",
    "Najazdené km",
    "Spotreba",
    "Zostatok nafty (L)",
    "Tankovanie (L)",
    "Trasa",
    "Poznámka",
];

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
pub const FALLBACK_SLUG: &str = "vozidlo";

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9-]").unwrap();
}

/// Documento CSV listo para descargar
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub filename: String,
    pub content: String,
}

impl ExportDocument {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Minúsculas, espacios a guiones, fuera todo lo que no sea `[a-z0-9-]`
pub fn slugify(label: &str) -> String {
    let lower = label.to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lower, "-");
    NON_SLUG_CHARS.replace_all(&hyphenated, "").into_owned()
}

/// Slug del vehículo para nombres de fichero, `vozidlo` si queda vacío
pub fn vehicle_slug(label: &str) -> String {
    let slug = slugify(label);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

pub fn export_filename(vehicle_label: &str, month: &str) -> String {
    format!("evidencia-{}-{}.csv", vehicle_slug(vehicle_label), month)
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn csv_line<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| quote(v.as_ref()))
        .collect::<Vec<_>>()
        .join(";")
}

/// Cuerpo CSV: cabecera y una línea por fila rellenada
pub fn render_csv(month_label: &str, rows: &[DayRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(csv_line(CSV_HEADER));

    for row in rows.iter().filter(|r| r.is_filled()) {
        lines.push(csv_line([
            format!("{}. {}", row.day, month_label),
            format_number(row.start_km),
            format_number(row.end_km),
            format_number(row.diff),
            format_number(row.consumption),
            format_number(row.fuel_remaining),
            format_number(row.refuel),
            row.route.clone(),
            row.note.clone(),
        ]));
    }

    lines.join("\r\n")
}

/// Construye el documento completo (nombre de fichero + contenido)
pub fn build_export(vehicle_label: &str, month: &str, month_label: &str, rows: &[DayRow]) -> ExportDocument {
    ExportDocument {
        filename: export_filename(vehicle_label, month),
        content: render_csv(month_label, rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::empty_rows;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Škoda Octavia  KE123AB"), "koda-octavia-ke123ab");
        assert_eq!(slugify("Transit (2019)"), "transit-2019");
        assert_eq!(slugify("***"), "");
        assert_eq!(vehicle_slug("***"), "vozidlo");
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Moje vozidlo", "11"), "evidencia-moje-vozidlo-11.csv");
    }

    #[test]
    fn test_only_filled_rows_are_exported() {
        let mut rows = empty_rows(31);
        rows[1].start_km = Some(100.0);
        rows[1].end_km = Some(150.0);
        rows[1].diff = Some(50.0);
        rows[9].note = "len poznámka".to_string();

        let csv = render_csv("November", &rows);
        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("\"Deň\";\"Tachometer začiatok\""));
        assert_eq!(
            lines[1],
            "\"2. November\";\"100\";\"150\";\"50\";\"\";\"\";\"\";\"\";\"\""
        );
        assert!(lines[2].starts_with("\"10. November\""));
        assert!(lines[2].ends_with("\"len poznámka\""));
    }

    #[test]
    fn test_quotes_are_doubled() {
        let mut rows = empty_rows(1);
        rows[0].route = "Hotel \"Grand\"; Praha".to_string();
        let csv = render_csv("Máj", &rows);
        assert!(csv.contains("\"Hotel \"\"Grand\"\"; Praha\""));
    }

    #[test]
    fn test_empty_month_has_only_header() {
        let csv = render_csv("Január", &empty_rows(31));
        assert!(!csv.contains("\r\n"));
    }

    #[test]
    fn test_content_disposition() {
        let doc = build_export("Octavia", "3", "Marec", &[]);
        assert_eq!(doc.content_disposition(), "attachment; filename=\"evidencia-octavia-3.csv\"");
    }
}
