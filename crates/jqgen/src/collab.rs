//! Traits for values supplied by the surrounding HTML layer

use std::fmt;

/// Something that renders itself as an HTML string
pub trait HtmlNode {
    fn to_html(&self) -> String;
}

/// Something that names a CSS class
pub trait CssClassProvider {
    fn css_class(&self) -> &str;
}

/// Something that carries an element ID
pub trait HasId {
    fn id(&self) -> &str;
}

impl CssClassProvider for str {
    fn css_class(&self) -> &str {
        self
    }
}

impl CssClassProvider for String {
    fn css_class(&self) -> &str {
        self
    }
}

impl<T: CssClassProvider + ?Sized> CssClassProvider for &T {
    fn css_class(&self) -> &str {
        (**self).css_class()
    }
}

impl<T: HasId + ?Sized> HasId for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: HtmlNode + ?Sized> HtmlNode for &T {
    fn to_html(&self) -> String {
        (**self).to_html()
    }
}

macro_rules! html_elements {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// HTML element names
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HtmlElement {
            $($variant,)*
        }

        impl HtmlElement {
            /// Every known element, in alphabetical order
            pub const ALL: &'static [HtmlElement] = &[$(HtmlElement::$variant,)*];

            /// Lower case tag name
            pub fn name(self) -> &'static str {
                match self {
                    $(HtmlElement::$variant => $name,)*
                }
            }
        }
    };
}

html_elements! {
    A => "a", Abbr => "abbr", Address => "address", Applet => "applet", Area => "area",
    Article => "article", Aside => "aside", Audio => "audio", B => "b", Base => "base",
    Bdi => "bdi", Bdo => "bdo", Blockquote => "blockquote", Body => "body", Br => "br",
    Button => "button", Canvas => "canvas", Caption => "caption", Center => "center",
    Cite => "cite", Code => "code", Col => "col", Colgroup => "colgroup", Command => "command",
    Datalist => "datalist", Dd => "dd", Del => "del", Details => "details", Dfn => "dfn",
    Dir => "dir", Div => "div", Dl => "dl", Dt => "dt", Em => "em", Embed => "embed",
    Fieldset => "fieldset", Figcaption => "figcaption", Figure => "figure", Font => "font",
    Footer => "footer", Form => "form", Frame => "frame", Frameset => "frameset",
    H1 => "h1", H2 => "h2", H3 => "h3", H4 => "h4", H5 => "h5", H6 => "h6",
    Head => "head", Header => "header", Hgroup => "hgroup", Hr => "hr", Html => "html",
    I => "i", Iframe => "iframe", Img => "img", Ins => "ins", Input => "input", Kbd => "kbd",
    Keygen => "keygen", Label => "label", Legend => "legend", Li => "li", Link => "link",
    Main => "main", Map => "map", Mark => "mark", Menu => "menu", Meta => "meta",
    Meter => "meter", Nav => "nav", Nobr => "nobr", Noscript => "noscript", Object => "object",
    Ol => "ol", Optgroup => "optgroup", Option => "option", Output => "output", P => "p",
    Param => "param", Pre => "pre", Progress => "progress", Q => "q", Rp => "rp", Rt => "rt",
    Ruby => "ruby", S => "s", Samp => "samp", Script => "script", Section => "section",
    Select => "select", Small => "small", Source => "source", Span => "span",
    Strong => "strong", Style => "style", Sub => "sub", Summary => "summary", Sup => "sup",
    Table => "table", Tbody => "tbody", Td => "td", Template => "template",
    Textarea => "textarea", Tfoot => "tfoot", Th => "th", Thead => "thead", Time => "time",
    Title => "title", Tr => "tr", Track => "track", U => "u", Ul => "ul", Var => "var",
    Video => "video", Wbr => "wbr",
}

impl fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
