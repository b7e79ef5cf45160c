// ============================================================================
// HOME VIEWMODEL - Gate de autenticación + composición de la home
// ============================================================================
// Colaboradores inyectados (sesión, catálogo, navegación), sin singletons.
// El gate se evalúa en cada render y en cada cambio del flag de sesión:
// - autenticado  -> redirect a /auth?next=/ (una vez por transición a true)
// - no autenticado -> página con navbar, cabecera y lista de CVs
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use crate::models::{PageMeta, ResumeSummary, HOME_META};
use crate::router::Navigator;
use crate::state::{CatalogReader, SessionReader, Subscription};
use crate::utils::constants::AUTH_REDIRECT;

pub const HOME_HEADING: &str = "Track Your Applications and Resume Ratings";
pub const HOME_SUBHEADING: &str = "Review Your Submission and check AI-Powered Feedback.";

/// Resultado de un render de la home
#[derive(Clone, PartialEq, Debug)]
pub enum HomeScreen {
    /// Gate activo: el cuerpo no se renderiza en este ciclo
    Redirecting,
    Page(HomePage),
}

/// Contenido de la home cuando el gate no aplica
#[derive(Clone, PartialEq, Debug)]
pub struct HomePage {
    pub heading: &'static str,
    pub subheading: &'static str,
    /// `None` si el catálogo está vacío (no se pinta el contenedor)
    pub resumes: Option<Vec<ResumeSummary>>,
}

/// ViewModel de la home
pub struct HomeViewModel {
    session: Rc<dyn SessionReader>,
    catalog: Rc<dyn CatalogReader>,
    navigator: Rc<dyn Navigator>,
    /// true si ya se disparó el redirect para el `true` actual
    redirected: Rc<Cell<bool>>,
    subscription: RefCell<Option<Subscription>>,
}

impl HomeViewModel {
    pub fn new(
        session: Rc<dyn SessionReader>,
        catalog: Rc<dyn CatalogReader>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            session,
            catalog,
            navigator,
            redirected: Rc::new(Cell::new(false)),
            subscription: RefCell::new(None),
        }
    }

    /// Montar: nueva instancia de la vista, se re-arma el gate y se
    /// escuchan cambios del flag de sesión
    pub fn mount(&self) {
        self.redirected.set(false);
        if self.subscription.borrow().is_some() {
            return;
        }

        let redirected = self.redirected.clone();
        let navigator = self.navigator.clone();
        let subscription = self.session.on_change(Box::new(move |authenticated: bool| {
            log::info!("🔐 [HOME] Cambio de sesión: authenticated={}", authenticated);
            check_gate(&redirected, authenticated, navigator.as_ref());
        }));
        *self.subscription.borrow_mut() = Some(subscription);
        log::info!("📌 [HOME] Montada");
    }

    /// Desmontar: se da de baja la suscripción
    pub fn unmount(&self) {
        if self.subscription.borrow_mut().take().is_some() {
            log::info!("📤 [HOME] Desmontada");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    /// Metadatos de página (independientes del gate)
    pub fn meta(&self) -> PageMeta {
        HOME_META
    }

    /// Render: evalúa el gate y compone la página
    pub fn render(&self) -> HomeScreen {
        let authenticated = self.session.is_authenticated();
        if check_gate(&self.redirected, authenticated, self.navigator.as_ref()) {
            return HomeScreen::Redirecting;
        }

        let resumes = unique_by_id(self.catalog.list_summaries());
        HomeScreen::Page(HomePage {
            heading: HOME_HEADING,
            subheading: HOME_SUBHEADING,
            resumes: if resumes.is_empty() { None } else { Some(resumes) },
        })
    }
}

impl Drop for HomeViewModel {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Evaluar el gate. Devuelve true si la home queda bloqueada.
/// El redirect se dispara solo en la primera evaluación con `true`.
fn check_gate(redirected: &Cell<bool>, authenticated: bool, navigator: &dyn Navigator) -> bool {
    if !authenticated {
        redirected.set(false);
        return false;
    }
    if !redirected.replace(true) {
        log::info!("🔀 [HOME] Sesión autenticada, redirigiendo a {}", AUTH_REDIRECT);
        navigator.navigate(AUTH_REDIRECT);
    }
    true
}

/// Quitar ids duplicados: gana la primera aparición, se mantiene el orden
fn unique_by_id(resumes: Vec<ResumeSummary>) -> Vec<ResumeSummary> {
    let mut seen = HashSet::new();
    resumes
        .into_iter()
        .filter(|resume| {
            let fresh = seen.insert(resume.id.clone());
            if !fresh {
                log::warn!("⚠️ [HOME] id de CV duplicado en catálogo, se ignora: {}", resume.id);
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feedback;
    use crate::state::{AuthState, CatalogState};

    #[derive(Default)]
    struct RecordingNavigator {
        visits: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, to: &str) {
            self.visits.borrow_mut().push(to.to_string());
        }
    }

    impl RecordingNavigator {
        fn visits(&self) -> Vec<String> {
            self.visits.borrow().clone()
        }
    }

    fn resume(id: &str) -> ResumeSummary {
        ResumeSummary {
            id: id.to_string(),
            company_name: Some(format!("Company {}", id)),
            job_title: None,
            image_path: format!("/images/{}.png", id),
            resume_path: format!("/resumes/{}.pdf", id),
            feedback: Feedback { overall_score: 60 },
        }
    }

    struct Fixture {
        auth: AuthState,
        catalog: CatalogState,
        navigator: Rc<RecordingNavigator>,
        vm: HomeViewModel,
    }

    fn fixture(authenticated: bool, resumes: Vec<ResumeSummary>) -> Fixture {
        let auth = AuthState::new();
        auth.set_authenticated(authenticated);
        let catalog = CatalogState::new();
        catalog.replace(resumes);
        let navigator = Rc::new(RecordingNavigator::default());
        let vm = HomeViewModel::new(
            Rc::new(auth.clone()),
            Rc::new(catalog.clone()),
            navigator.clone(),
        );
        Fixture { auth, catalog, navigator, vm }
    }

    fn ids(screen: &HomeScreen) -> Vec<String> {
        match screen {
            HomeScreen::Page(page) => page
                .resumes
                .iter()
                .flatten()
                .map(|r| r.id.clone())
                .collect(),
            HomeScreen::Redirecting => panic!("expected page, got redirect"),
        }
    }

    #[test]
    fn test_authenticated_render_redirects_once() {
        let f = fixture(true, vec![resume("r1")]);
        f.vm.mount();

        assert_eq!(f.vm.render(), HomeScreen::Redirecting);
        assert_eq!(f.navigator.visits(), vec!["/auth?next=/"]);
    }

    #[test]
    fn test_redirect_ignores_catalog_contents() {
        let f = fixture(true, Vec::new());
        assert_eq!(f.vm.render(), HomeScreen::Redirecting);
        assert_eq!(f.navigator.visits(), vec!["/auth?next=/"]);
    }

    #[test]
    fn test_rerenders_while_authenticated_do_not_loop() {
        let f = fixture(true, vec![resume("r1")]);
        f.vm.mount();

        for _ in 0..3 {
            assert_eq!(f.vm.render(), HomeScreen::Redirecting);
        }
        f.auth.set_authenticated(true);

        assert_eq!(f.navigator.visits().len(), 1);
    }

    #[test]
    fn test_flag_change_triggers_redirect_without_render() {
        let f = fixture(false, vec![resume("r1")]);
        f.vm.mount();
        assert!(matches!(f.vm.render(), HomeScreen::Page(_)));
        assert!(f.navigator.visits().is_empty());

        f.auth.set_authenticated(true);
        assert_eq!(f.navigator.visits(), vec!["/auth?next=/"]);

        // El render siguiente queda bloqueado sin un segundo redirect
        assert_eq!(f.vm.render(), HomeScreen::Redirecting);
        assert_eq!(f.navigator.visits().len(), 1);
    }

    #[test]
    fn test_each_transition_to_true_redirects_again() {
        let f = fixture(false, Vec::new());
        f.vm.mount();

        f.auth.set_authenticated(true);
        f.auth.set_authenticated(false);
        f.auth.set_authenticated(true);

        assert_eq!(f.navigator.visits().len(), 2);
    }

    #[test]
    fn test_unmount_releases_subscription() {
        let f = fixture(false, Vec::new());
        f.vm.mount();
        assert!(f.vm.is_mounted());

        f.vm.unmount();
        f.auth.set_authenticated(true);

        assert!(!f.vm.is_mounted());
        assert!(f.navigator.visits().is_empty());
    }

    #[test]
    fn test_mount_twice_keeps_single_subscription() {
        let f = fixture(false, Vec::new());
        f.vm.mount();
        f.vm.mount();

        f.auth.set_authenticated(true);

        assert_eq!(f.navigator.visits().len(), 1);
    }

    #[test]
    fn test_empty_catalog_omits_list() {
        let f = fixture(false, Vec::new());
        match f.vm.render() {
            HomeScreen::Page(page) => {
                assert_eq!(page.heading, HOME_HEADING);
                assert_eq!(page.resumes, None);
            }
            HomeScreen::Redirecting => panic!("unauthenticated home must render"),
        }
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let f = fixture(false, vec![resume("A"), resume("B"), resume("C")]);
        assert_eq!(ids(&f.vm.render()), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_duplicate_ids_are_deduplicated_first_wins() {
        let mut duplicate = resume("A");
        duplicate.company_name = Some("Second A".to_string());
        let f = fixture(false, vec![resume("A"), resume("B"), duplicate, resume("C")]);

        let screen = f.vm.render();
        assert_eq!(ids(&screen), vec!["A", "B", "C"]);
        if let HomeScreen::Page(page) = screen {
            let resumes = page.resumes.unwrap();
            assert_eq!(resumes[0].company_name.as_deref(), Some("Company A"));
        }
    }

    #[test]
    fn test_catalog_updates_show_on_next_render() {
        let f = fixture(false, Vec::new());
        assert_eq!(ids(&f.vm.render()), Vec::<String>::new());

        f.catalog.replace(vec![resume("r9")]);
        assert_eq!(ids(&f.vm.render()), vec!["r9"]);
    }

    #[test]
    fn test_single_resume_scenario() {
        let f = fixture(false, vec![resume("r1")]);
        match f.vm.render() {
            HomeScreen::Page(page) => {
                assert_eq!(page.heading, "Track Your Applications and Resume Ratings");
                assert_eq!(page.resumes.map(|r| r.len()), Some(1));
            }
            HomeScreen::Redirecting => panic!("unauthenticated home must render"),
        }
        assert!(f.navigator.visits().is_empty());
    }

    #[test]
    fn test_meta_is_independent_of_gate() {
        let gated = fixture(true, Vec::new());
        let open = fixture(false, Vec::new());
        assert_eq!(gated.vm.meta(), open.vm.meta());
        assert_eq!(open.vm.meta().title, "AI-Resume");
        assert_eq!(open.vm.meta().description, "AI Powered Resume Tracking System");
    }
}
