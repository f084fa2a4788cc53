//! Process-wide catalog registry
//!
//! Catalogs are built lazily, once per locale, and shared for the process
//! lifetime. Concurrent first use of the same locale performs exactly one
//! construction; every caller observes the same fully built catalog.

use crate::catalog::Catalog;
use crate::locale::Locale;
use once_cell::sync::OnceCell;

static ENGLISH: OnceCell<Catalog> = OnceCell::new();
static THAI: OnceCell<Catalog> = OnceCell::new();

/// The shared catalog for a locale
///
/// The embedded catalogs are validated at build time (`build.rs`) and by
/// this crate's tests; a failure to construct one here is a defect in the
/// shipped locale data and panics rather than degrading to wrong text.
pub fn catalog(locale: Locale) -> &'static Catalog {
    let cell = match locale {
        Locale::English => &ENGLISH,
        Locale::Thai => &THAI,
    };
    cell.get_or_init(|| {
        Catalog::build(locale).unwrap_or_else(|error| {
            panic!(
                "embedded catalog for locale {} failed to build: {error}",
                locale.code()
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_lookups_share_one_catalog() {
        let first = catalog(Locale::Thai) as *const Catalog;
        let second = catalog(Locale::Thai) as *const Catalog;
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_first_use_builds_at_most_once() {
        let pointers: Vec<usize> = std::thread::scope(|scope| {
            (0..8)
                .map(|_| {
                    scope.spawn(|| catalog(Locale::English) as *const Catalog as usize)
                })
                .collect::<Vec<_>>()
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });
        assert!(pointers.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
