/// Which facet of a profile the detail screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Forms,
    Detail,
    Types,
    Stats,
    /// Selectable, but nothing backs it.
    Weakness,
}

impl DetailTab {
    pub const ALL: [DetailTab; 5] = [
        DetailTab::Forms,
        DetailTab::Detail,
        DetailTab::Types,
        DetailTab::Stats,
        DetailTab::Weakness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Forms => "Forms",
            DetailTab::Detail => "Detail",
            DetailTab::Types => "Types",
            DetailTab::Stats => "Stats",
            DetailTab::Weakness => "Weakness",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn has_content(self) -> bool {
        !matches!(self, DetailTab::Weakness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_forms() {
        assert_eq!(DetailTab::default(), DetailTab::Forms);
    }

    #[test]
    fn cycles_both_ways() {
        let mut tab = DetailTab::Forms;
        let mut seen = vec![];
        for _ in 0..DetailTab::ALL.len() {
            seen.push(tab.label());
            tab = tab.next();
        }
        assert_eq!(seen, vec!["Forms", "Detail", "Types", "Stats", "Weakness"]);
        assert_eq!(tab, DetailTab::Forms);
        assert_eq!(DetailTab::Forms.previous(), DetailTab::Weakness);
        assert_eq!(DetailTab::Stats.previous(), DetailTab::Types);
    }

    #[test]
    fn weakness_is_empty() {
        assert!(!DetailTab::Weakness.has_content());
        assert!(DetailTab::ALL[..4].iter().all(|t| t.has_content()));
    }
}
