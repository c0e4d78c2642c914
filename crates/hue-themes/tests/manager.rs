mod common;

use std::sync::Arc;

use common::{theme, MemoryReader, MONOKAI};
use hue_config::{Settings, ThemeSelection};
use hue_themes::{EmbeddedStyles, ThemeError, ThemeManager, ThemeRegistry};

struct Fixture {
    reader: Arc<MemoryReader>,
    styles: Arc<EmbeddedStyles>,
    manager: ThemeManager,
}

fn fixture(selection: &str) -> Fixture {
    let reader = MemoryReader::new();
    let styles = Arc::new(EmbeddedStyles::new());
    reader.insert("monokai.css", MONOKAI);
    reader.insert("light.css", ".CodeMirror { background: #fff; }");

    let mut registry = ThemeRegistry::new();
    registry.register(theme("monokai.css", &reader, &styles));
    registry.register(theme("light.css", &reader, &styles));

    let settings = Settings {
        theme: ThemeSelection::from(selection),
        ..Settings::default()
    };
    let manager = ThemeManager::new(settings, registry, styles.clone());

    Fixture {
        reader,
        styles,
        manager,
    }
}

#[tokio::test]
async fn test_apply_embeds_theme_and_scrollbars() {
    let fx = fixture("monokai");

    let classes = fx.manager.apply().await.unwrap();
    assert_eq!(classes, vec!["theme-monokai".to_string()]);
    assert_eq!(fx.manager.active(), vec!["monokai".to_string()]);

    let scrollbar = fx.manager.scrollbar_stylesheet().unwrap();
    let scrollbar_css = fx.styles.css_for(scrollbar).unwrap();
    assert!(scrollbar_css.contains("::-webkit-scrollbar-thumb"));
    assert_eq!(fx.styles.len(), 2);
}

#[tokio::test]
async fn test_scrollbar_toggle() {
    let fx = fixture("monokai");
    fx.manager.apply().await.unwrap();

    fx.manager.set_custom_scrollbars(false);
    assert!(fx.manager.scrollbar_stylesheet().is_none());
    assert_eq!(fx.styles.len(), 1);
    assert!(!fx.styles.combined().contains("webkit"));
    assert!(!fx.manager.settings().custom_scrollbars);

    fx.manager.set_custom_scrollbars(true);
    assert!(fx.manager.scrollbar_stylesheet().is_some());
    assert_eq!(fx.styles.len(), 2);
}

#[tokio::test]
async fn test_switching_replaces_previous_theme() {
    let fx = fixture("monokai");
    fx.manager.apply().await.unwrap();

    let classes = fx.manager.set_theme("light").await.unwrap();
    assert_eq!(classes, vec!["theme-light".to_string()]);

    let registry = fx.manager.registry();
    assert!(!registry.get("monokai").unwrap().is_loaded());
    assert!(registry.get("light").unwrap().is_loaded());
    // light has no scrollbar rules
    assert!(fx.manager.scrollbar_stylesheet().is_none());
    assert_eq!(fx.styles.len(), 1);
}

#[tokio::test]
async fn test_multiple_selected_themes() {
    let fx = fixture("monokai");
    let classes = fx
        .manager
        .set_theme(vec!["light".to_string(), "monokai".to_string()])
        .await
        .unwrap();

    assert_eq!(
        classes,
        vec!["theme-light".to_string(), "theme-monokai".to_string()]
    );
    assert_eq!(fx.styles.len(), 3);
}

#[tokio::test]
async fn test_unknown_theme_keeps_previous_selection() {
    let fx = fixture("monokai");
    fx.manager.apply().await.unwrap();

    let err = fx.manager.set_theme("missing").await.unwrap_err();
    assert!(matches!(err, ThemeError::NotFound(ref name) if name == "missing"));
    assert_eq!(fx.manager.active(), vec!["monokai".to_string()]);
    assert_eq!(
        fx.manager.settings().theme,
        ThemeSelection::Single("monokai".to_string())
    );
    assert!(fx.manager.registry().get("monokai").unwrap().is_loaded());
}

#[tokio::test]
async fn test_failed_apply_unloads_partially_loaded_themes() {
    let fx = fixture("monokai");
    fx.reader.insert("light.css", ".a { color: red;");

    let err = fx
        .manager
        .set_theme(vec!["monokai".to_string(), "light".to_string()])
        .await
        .unwrap_err();

    assert!(matches!(err, ThemeError::Compile { .. }));
    assert!(fx.manager.active().is_empty());
    assert!(!fx.manager.registry().get("monokai").unwrap().is_loaded());
    assert!(fx.styles.is_empty());
}

#[tokio::test]
async fn test_reload() {
    let fx = fixture("light");
    fx.manager.apply().await.unwrap();

    fx.manager.reload(false).await.unwrap();
    assert_eq!(fx.reader.reads(), 1);

    fx.reader
        .insert("light.css", ".CodeMirror { background: #eee; }");
    fx.manager.reload(true).await.unwrap();
    assert_eq!(fx.reader.reads(), 2);
    assert!(fx.styles.combined().contains("#eee"));
}

#[tokio::test]
async fn test_failed_forced_reload_still_reloads_remaining_themes() {
    let fx = fixture("monokai");
    fx.manager
        .set_theme(vec!["monokai".to_string(), "light".to_string()])
        .await
        .unwrap();
    assert!(fx.manager.scrollbar_stylesheet().is_some());

    fx.reader.remove("monokai.css");
    fx.reader
        .insert("light.css", ".CodeMirror { background: #eee; }");

    let err = fx.manager.reload(true).await.unwrap_err();
    assert!(matches!(err, ThemeError::Read { ref theme, .. } if theme == "monokai"));

    let registry = fx.manager.registry();
    assert!(!registry.get("monokai").unwrap().is_loaded());
    assert!(registry.get("light").unwrap().is_loaded());
    assert!(fx.styles.combined().contains("#eee"));

    // monokai lost its stylesheet, so its scrollbar rules go too
    assert!(fx.manager.scrollbar_stylesheet().is_none());
    assert!(!fx.styles.combined().contains("webkit"));
    assert_eq!(fx.styles.len(), 1);
}
