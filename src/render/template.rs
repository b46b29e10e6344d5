use minijinja::Environment;
use once_cell::sync::Lazy;

/// The fixed HTML shells compiled into the binary, as `(name, source)` pairs.
const BUILTINS: [(&str, &str); 2] = [
    ("document.html", include_str!("builtins/document.html")),
    ("certificate.html", include_str!("builtins/certificate.html")),
];

/// Returns the process-wide template environment, populating it on first use.
///
/// The environment is immutable after construction, so handing out a shared
/// reference is sound for concurrent render calls.
pub fn environment() -> &'static Environment<'static> {
    static ENVIRONMENT: Lazy<Environment<'static>> = Lazy::new(|| {
        let mut environment = Environment::new();

        for (name, source) in BUILTINS {
            // Expect justification: the shells are static assets, vetted at build time.
            environment
                .add_template(name, source)
                .expect("Built-in shell failed to compile!");
        }

        environment
    });

    &ENVIRONMENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shells_compile() {
        let mut environment = Environment::new();

        for (name, source) in BUILTINS {
            environment.add_template(name, source).unwrap();
        }
    }

    #[test]
    fn environment_contains_both_shells() {
        assert!(environment().get_template("document.html").is_ok());
        assert!(environment().get_template("certificate.html").is_ok());
    }
}
