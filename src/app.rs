use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{AuthPage, NotFoundPage};
use crate::ui::{NotificationsContainer, provide_notifications, provide_session_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Session and auth screen state, written by screens through AppEvents
    let _session = provide_session_context();

    let notifications = provide_notifications();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/threads-web.css"/>

        <Title text="Threads - Sign up"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=AuthPage/>
            </Routes>
        </Router>

        <NotificationsContainer notifications=notifications.notifications() />
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    fn manifest_dir() -> &'static Path {
        Path::new(env!("CARGO_MANIFEST_DIR"))
    }

    fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                rust_sources(&path, out);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.push(path);
            }
        }
    }

    fn stylesheet() -> String {
        let manifest = fs::read_to_string(manifest_dir().join("Cargo.toml")).unwrap();
        let input = manifest
            .lines()
            .find_map(|line| line.strip_prefix("tailwind-input-file = "))
            .unwrap()
            .trim_matches('"');
        fs::read_to_string(manifest_dir().join(input)).unwrap()
    }

    #[test]
    fn test_stylesheet_is_built_with_tailwind() {
        assert!(stylesheet().contains("@import \"tailwindcss\";"));
    }

    #[test]
    fn test_custom_classes_are_defined_in_stylesheet() {
        let css = stylesheet();
        let mut files = Vec::new();
        rust_sources(&manifest_dir().join("src"), &mut files);

        let custom = ["bg-theme-", "text-theme-", "border-theme", "input-base", "animate-fade-in-up"];

        for file in files.iter().filter(|f| !f.ends_with("app.rs")) {
            let source = fs::read_to_string(file).unwrap();
            let classes = source
                .split(|c: char| c.is_whitespace() || c == '"' || c == ':')
                .map(|token| token.trim_matches(|c: char| !(c.is_ascii_alphanumeric() || c == '-')))
                .filter(|token| custom.iter().any(|prefix| token.starts_with(prefix)));

            for class in classes {
                assert!(
                    css.contains(&format!("@utility {} {{", class)),
                    "{} uses undefined class {}",
                    file.display(),
                    class
                );
            }
        }
    }
}
