//! Plain-text observation report for the selected child.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use super::format::format_full_date;
use super::portal::PortalState;
use crate::net::types::{Child, Observation};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("Selecciona un hijo primero")]
    NoChildSelected,
}

/// Downloadable report: file name plus body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub filename: String,
    pub body: String,
}

/// `observaciones_{Nombre_Con_Guiones}_{YYYY-MM-DD}.txt`
#[must_use]
pub fn report_filename(child_name: &str, date: &str) -> String {
    let name = child_name.split_whitespace().collect::<Vec<_>>().join("_");
    let name = if name.is_empty() { "hijo".to_owned() } else { name };
    format!("observaciones_{name}_{date}.txt")
}

#[must_use]
pub fn render_report(child: &Child, observations: &[Observation], date: &str) -> String {
    let mut out = format!(
        "Reporte de Observaciones\n\nHijo: {}\nGrado: {}\nFecha: {date}\n\nObservaciones: {}\n",
        child.nombre,
        child.grado,
        observations.len()
    );
    for obs in observations {
        out.push_str(&format!(
            "\n[{}] {} - {}\n{}\n",
            format_full_date(&obs.fecha),
            obs.tipo.as_str(),
            obs.profesor.as_deref().unwrap_or("Profesor"),
            obs.descripcion
        ));
    }
    out
}

/// Build the report for the currently selected child.
///
/// # Errors
///
/// [`ExportError::NoChildSelected`] when no child is selected.
pub fn build_report(state: &PortalState, date: &str) -> Result<Report, ExportError> {
    let child = state.selected_child().ok_or(ExportError::NoChildSelected)?;
    Ok(Report {
        filename: report_filename(&child.nombre, date),
        body: render_report(child, state.observations(), date),
    })
}
