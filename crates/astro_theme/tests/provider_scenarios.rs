use astro_theme::{
    provide_store, provide_theme, use_style_accessor, use_theme, ColorScheme, ThemeError,
    ThemeSnapshot, ThemeStore, PALETTE,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[test]
fn cold_start_reports_light_mode() {
    provide_theme(|| {
        let theme = use_theme().unwrap();
        assert_eq!(theme.state(), ThemeSnapshot { is_dark_mode: false });
        assert_eq!(theme.current_variant().scheme, ColorScheme::Light);
    });
}

#[test]
fn single_toggle_then_query_returns_dark_text() {
    provide_theme(|| {
        use_theme().unwrap().toggle();
        let styles = use_style_accessor().unwrap();
        let primary = styles.get_text_color(Some("primary")).unwrap();
        assert_eq!(primary.to_string(), "#ffffff");
        assert_ne!(primary, PALETTE.charcoal);
    });
}

#[test]
fn toggle_twice_returns_to_light() {
    provide_theme(|| {
        let theme = use_theme().unwrap();
        assert_eq!(theme.toggle(), ColorScheme::Dark);
        assert!(theme.is_dark_mode());
        assert_eq!(theme.toggle(), ColorScheme::Light);
        assert!(!theme.is_dark_mode());
    });
}

#[test]
fn provider_less_access_is_a_precondition_violation() {
    assert_eq!(use_theme().unwrap_err(), ThemeError::OutsideProvider);
    assert_eq!(
        use_style_accessor().unwrap_err().to_string(),
        "use_theme must be used within a theme provider scope"
    );
}

#[test]
fn consumers_are_notified_and_observe_new_mode() {
    let store = ThemeStore::shared();
    let observed = Arc::new(Mutex::new(Vec::new()));
    let renders = Arc::new(AtomicUsize::new(0));

    provide_store(Arc::clone(&store), || {
        let theme = use_theme().unwrap();
        let styles = use_style_accessor().unwrap();

        let (log, count) = (Arc::clone(&observed), Arc::clone(&renders));
        theme.subscribe(move |scheme| {
            count.fetch_add(1, Ordering::SeqCst);
            log.lock()
                .unwrap()
                .push((scheme, styles.get_background_color(None).unwrap()));
        });

        theme.toggle();
        theme.toggle();
    });

    assert_eq!(renders.load(Ordering::SeqCst), 2);
    assert_eq!(
        *observed.lock().unwrap(),
        vec![
            (ColorScheme::Dark, PALETTE.dark_navy),
            (ColorScheme::Light, PALETTE.matte_white),
        ]
    );
}

#[test]
fn separate_scopes_do_not_share_state() {
    provide_theme(|| use_theme().unwrap().toggle());
    provide_theme(|| assert!(!use_theme().unwrap().is_dark_mode()));
}

#[test]
fn colors_handle_exposes_brand_palette() {
    provide_theme(|| {
        let theme = use_theme().unwrap();
        assert_eq!(theme.colors().get("deepBlue").unwrap().to_string(), "#1a237e");
    });
}
