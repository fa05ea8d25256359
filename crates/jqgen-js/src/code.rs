//! Rendering entry points shared by all source-producing types

use crate::formatter::JsFormatter;
use crate::settings::WriterSettings;

/// A value that can write itself as JavaScript source
pub trait HasJsCode {
    /// Write this value into the formatter
    fn generate(&self, f: &mut JsFormatter<'_>);

    /// Render this value to a string using `settings`
    fn to_js_code(&self, settings: &WriterSettings) -> String {
        let mut f = JsFormatter::new(settings);
        self.generate(&mut f);
        f.finish()
    }
}

/// Write `items` separated by `,`
pub(crate) fn generate_list<'a, T, I>(f: &mut JsFormatter<'_>, items: I)
where
    T: HasJsCode + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.plain_char(',');
        }
        item.generate(f);
    }
}
