/// URL del catálogo remoto de CVs (JSON)
/// Configurada en tiempo de compilación:
/// - Sin definir: se usa solo el catálogo embebido (`data/resumes.json`)
/// - Definida (via RESUME_CATALOG_URL en env o .env): se descarga al arrancar
pub const RESUME_CATALOG_URL: Option<&str> = option_env!("RESUME_CATALOG_URL");

/// ID del elemento raíz donde se monta la app
pub const APP_ROOT_ID: &str = "app";

/// Clave de localStorage para el flag de autenticación
pub const AUTH_STORAGE_KEY: &str = "auth.isAuthenticated";

/// Destino del gate de la home
pub const AUTH_REDIRECT: &str = "/auth?next=/";

/// Ruta de subida de CVs (enlace de la navbar)
pub const UPLOAD_PATH: &str = "/upload";
