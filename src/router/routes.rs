/// Rutas registradas en la app
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    /// `/` - home con la lista de CVs
    Home,
    /// `/auth` - login / logout
    Auth,
}

impl Route {
    /// Tabla completa de rutas
    pub const ALL: [Route; 2] = [Route::Home, Route::Auth];

    /// Path canónico de la ruta
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Auth => "/auth",
        }
    }

    /// Resolver una URL (path + query opcional) a una ruta registrada.
    /// Query string y fragment no cuentan; la barra final tampoco.
    pub fn resolve(url: &str) -> Option<Route> {
        let path = path_of(url);
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Parte de path de una URL relativa
fn path_of(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

/// Obtener un parámetro de la query string (`?a=1&next=%2F`).
/// Se separa sobre la query cruda y solo se decodifica el valor encontrado,
/// así un `%26` dentro del valor no parte el parámetro.
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or("");
    let raw = query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)?;
    match urlencoding::decode(raw) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            log::warn!("⚠️ [ROUTER] Parámetro {} mal codificado ({}), se usa sin decodificar", key, e);
            Some(raw.to_string())
        }
    }
}
