// ============================================================================
// CATALOG SERVICE - SOLO carga del catálogo de CVs (embebido o HTTP)
// ============================================================================

use gloo_net::http::Request;
use thiserror::Error;
use crate::models::ResumeSummary;
use crate::state::CatalogState;

/// Catálogo embebido en el binario
const BUNDLED_CATALOG: &str = include_str!("../../data/resumes.json");

/// Errores al cargar el catálogo
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("error de red: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("catálogo inválido: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parsear un documento de catálogo (array JSON de ResumeSummary)
pub fn parse_catalog(json: &str) -> Result<Vec<ResumeSummary>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Catálogo embebido (`data/resumes.json`)
pub fn bundled_catalog() -> Result<Vec<ResumeSummary>, CatalogError> {
    parse_catalog(BUNDLED_CATALOG)
}

/// Descargar catálogo desde `url`
pub async fn fetch_catalog(url: &str) -> Result<Vec<ResumeSummary>, CatalogError> {
    log::info!("🌐 [CATALOG] Descargando catálogo desde {}", url);
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }
    let body = response.text().await?;
    parse_catalog(&body)
}

/// Cargar catálogo en `catalog`: primero el embebido, luego el remoto si hay URL.
/// Si el remoto falla se mantiene el embebido.
pub fn load_into(catalog: &CatalogState, remote_url: Option<&'static str>) {
    match bundled_catalog() {
        Ok(resumes) => catalog.replace(resumes),
        Err(e) => log::error!("❌ [CATALOG] Catálogo embebido inválido: {}", e),
    }

    if let Some(url) = remote_url {
        let catalog = catalog.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_catalog(url).await {
                Ok(resumes) => catalog.replace(resumes),
                Err(e) => log::error!("❌ [CATALOG] Error cargando {}: {}", url, e),
            }
        });
    }
}
