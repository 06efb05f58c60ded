/// Suffixes appended when every plain template is already taken.
pub(super) const CREATIVE_SUFFIXES: &[&str] = &[
    "Deluxe",
    "Premium",
    "Speciale",
    "Suprema",
    "Eccellente",
    "Gourmet",
    "Signature",
    "Chef",
];

/// A single name template. `pattern` uses `{a}`, `{b}`, `{c}` placeholders;
/// `arity` is the number of short-form slots the pattern consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameTemplate {
    pub arity: usize,
    pub pattern: &'static str,
}

impl NameTemplate {
    const fn new(arity: usize, pattern: &'static str) -> Self {
        Self { arity, pattern }
    }

    /// Renders the pattern against up to three slots. Placeholders beyond the
    /// provided slots are left untouched; registries only hand out templates
    /// whose arity is satisfied.
    pub fn render(&self, slots: &[&str]) -> String {
        let mut out = self.pattern.to_string();
        for (placeholder, value) in ["{a}", "{b}", "{c}"].iter().zip(slots) {
            out = out.replace(placeholder, value);
        }
        out
    }
}

/// The declarative template bank, keyed by slot-arity so coverage per arity
/// is independently testable.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<NameTemplate>,
}

impl TemplateRegistry {
    pub fn new(templates: Vec<NameTemplate>) -> Self {
        Self { templates }
    }

    /// The production template bank.
    pub fn standard() -> Self {
        Self::new(vec![
            // One leading ingredient
            NameTemplate::new(1, "La {a}"),
            NameTemplate::new(1, "Pizza {a}"),
            NameTemplate::new(1, "Delizia di {a}"),
            NameTemplate::new(1, "Profumi di {a}"),
            NameTemplate::new(1, "Tentazione {a}"),
            NameTemplate::new(1, "Armonia di {a}"),
            NameTemplate::new(1, "Napoletana al {a}"),
            NameTemplate::new(1, "Romana con {a}"),
            NameTemplate::new(1, "Focaccia {a}"),
            NameTemplate::new(1, "{a} Gourmet"),
            NameTemplate::new(1, "Speciale {a}"),
            NameTemplate::new(1, "{a} Premium"),
            NameTemplate::new(1, "Fantasia di {a}"),
            NameTemplate::new(1, "Contrasto {a}"),
            NameTemplate::new(1, "Equilibrio {a}"),
            NameTemplate::new(1, "Gusto {a}"),
            NameTemplate::new(1, "Essenza di {a}"),
            NameTemplate::new(1, "Tradizione {a}"),
            // Two leading ingredients
            NameTemplate::new(2, "Pizza {a} e {b}"),
            NameTemplate::new(2, "{a} e {b}"),
            NameTemplate::new(2, "Sapori di {a} e {b}"),
            NameTemplate::new(2, "Delizia {a} e {b}"),
            NameTemplate::new(2, "{a} al {b}"),
            NameTemplate::new(2, "{b} e {a}"),
            NameTemplate::new(2, "Napoletana {a} e {b}"),
            NameTemplate::new(2, "Romana {a} e {b}"),
            NameTemplate::new(2, "Focaccia {a} e {b}"),
            NameTemplate::new(2, "Sinfonia {a} e {b}"),
            NameTemplate::new(2, "Incontro di {a} e {b}"),
            NameTemplate::new(2, "Fusione {a} e {b}"),
            NameTemplate::new(2, "Dolce {a} al {b}"),
            NameTemplate::new(2, "{a} in {b}"),
            NameTemplate::new(2, "Gusto {a} e {b}"),
            NameTemplate::new(2, "Essenza di {a} e {b}"),
            NameTemplate::new(2, "Tradizione {a} e {b}"),
            NameTemplate::new(2, "Contrasto {a} e {b}"),
            NameTemplate::new(2, "Equilibrio {a} e {b}"),
            // Three leading ingredients
            NameTemplate::new(3, "Trio {a}, {b} e {c}"),
            NameTemplate::new(3, "{a}, {b} e {c}"),
            NameTemplate::new(3, "Pizza {a}, {b} e {c}"),
            NameTemplate::new(3, "Sapori di {a}, {b} e {c}"),
        ])
    }

    /// Every template whose arity the available slot count satisfies.
    pub fn up_to_arity(&self, arity: usize) -> impl Iterator<Item = &NameTemplate> {
        self.templates.iter().filter(move |t| t.arity <= arity)
    }

    /// Templates of exactly one arity.
    pub fn of_arity(&self, arity: usize) -> impl Iterator<Item = &NameTemplate> {
        self.templates.iter().filter(move |t| t.arity == arity)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
