//! Vista de impresión
//!
//! Genera un documento HTML independiente con las filas rellenadas del mes
//! y una fila de pie con el total de kilómetros, listo para imprimir o
//! guardar como PDF desde el navegador.

use chrono::{DateTime, Local};

use crate::models::DayRow;
use crate::services::row_edit_service::{filled_rows, format_number, total_km};
use crate::utils::errors::{AppError, AppResult};

pub const NOTHING_TO_PRINT: &str = "Nie je čo tlačiť – žiadne vyplnené riadky.";

const PRINT_STYLE: &str = r#"
    body {
      font-family: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
      font-size: 12px;
      margin: 20px;
      color: #111827;
    }
    h1 { font-size: 18px; margin-bottom: 4px; }
    .meta { font-size: 12px; margin-bottom: 12px; color: #4b5563; }
    table { width: 100%; border-collapse: collapse; margin-bottom: 12px; }
    th, td { border: 1px solid #d1d5db; padding: 4px 6px; text-align: left; }
    th { background: #e5e7eb; font-size: 11px; text-transform: uppercase; }
    tfoot td { font-weight: 600; background: #f3f4f6; }
    .text-right { text-align: right; }
    @media print { button { display: none; } }
"#;

const PRINT_COLUMNS: [&str; 9] = [
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

/// Escapa texto libre para insertarlo en HTML
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn render_row(row: &DayRow) -> String {
    format!(
        "      <tr>\n        <td>{}.</td>\n        <td>{}</td>\n        <td>{}</td>\n        <td>{}</td>\n        <td>{}</td>\n        <td>{}</td>\n        <td>{}</td>\n        <td>{}</td>\n        <td>{}</td>\n      </tr>\n",
        row.day,
        format_number(row.start_km),
        format_number(row.end_km),
        format_number(row.diff),
        format_number(row.consumption),
        format_number(row.fuel_remaining),
        format_number(row.refuel),
        escape_html(&row.route),
        escape_html(&row.note),
    )
}

/// HTML de impresión. Sin filas rellenadas no hay nada que presentar.
pub fn render_print_view(
    vehicle_label: &str,
    month_label: &str,
    rows: &[DayRow],
    generated_at: DateTime<Local>,
) -> AppResult<String> {
    let filled = filled_rows(rows);
    if filled.is_empty() {
        return Err(AppError::PresentationBlocked(NOTHING_TO_PRINT.to_string()));
    }

    let title = escape_html(&format!("Evidencia jázd – {} – {}", vehicle_label, month_label));
    let header: String = PRINT_COLUMNS
        .iter()
        .map(|c| format!("        <th>{}</th>\n", c))
        .collect();
    let body: String = filled.into_iter().map(render_row).collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="sk">
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <style>{style}</style>
</head>
<body>
  <h1>{title}</h1>
  <div class="meta">
    Vytvorené: {created}
  </div>

  <table>
    <thead>
      <tr>
{header}      </tr>
    </thead>
    <tbody>
{body}    </tbody>
    <tfoot>
      <tr>
        <td colspan="3">Spolu km za mesiac</td>
        <td class="text-right">{total}</td>
        <td colspan="5"></td>
      </tr>
    </tfoot>
  </table>

  <button onclick="window.print()">Tlačiť / Uložiť ako PDF</button>
</body>
</html>
"#,
        title = title,
        style = PRINT_STYLE,
        created = generated_at.format("%-d. %-m. %Y %H:%M:%S"),
        header = header,
        body = body,
        total = total_km(rows),
    ))
}
