//! Requirement expression model and its canonical string compiler.
//!
//! A [`Requirement`] is a closed tree of nodes that compiles into the compact
//! grammar understood by the consuming engine:
//!
//! ```text
//! requirement   := subject | combination | option_gate | raw_string
//! subject       := "|" ["@"] name [":" amount] "|"
//! combination   := "(" requirement (" " ("and"|"or") " " requirement)+ ")"
//! option_gate   := "{" gate_kind "(" requirement ")" "}"
//! gate_kind     := "OptOne" | "OptAll"
//! amount        := integer | percentage ("<digits>%")
//! ```
//!
//! Compilation is pure: the same tree always yields the same bytes. Every
//! combination is parenthesized, so nesting never depends on precedence.

mod builder;
mod scan;

pub use builder::{all_of, any_of, category, combination, item, opt_all, opt_one, raw, some_of};
pub use scan::{SubjectRef, scan_references};

pub use crate::error::RequirementError;

use crate::entity::{Category, Item, Named};

/// Characters that delimit grammar tokens and cannot appear in a subject name.
const RESERVED: [char; 1] = ['|'];

/// The entity a subject node points at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Subject {
    Item(String),
    /// Serialized with the `@` sigil.
    Category(String),
}

impl Subject {
    pub fn name(&self) -> &str {
        match self {
            Subject::Item(name) | Subject::Category(name) => name,
        }
    }

    fn validate(&self) -> Result<(), RequirementError> {
        let name = self.name();
        if name.is_empty() {
            return Err(RequirementError::EmptyName);
        }
        if let Some(character) = name.chars().find(|c| RESERVED.contains(c)) {
            return Err(RequirementError::ReservedCharacter {
                name: name.to_owned(),
                character,
            });
        }
        // Names that would read back as a different subject.
        let sigil = matches!(self, Subject::Item(_)) && name.starts_with('@');
        let amount_suffix = name
            .rsplit_once(':')
            .is_some_and(|(_, suffix)| scan::is_amount(suffix));
        if sigil || amount_suffix {
            return Err(RequirementError::AmbiguousName {
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    fn write(&self, amount: Option<&Amount>, out: &mut String) {
        out.push('|');
        if let Subject::Category(_) = self {
            out.push('@');
        }
        out.push_str(self.name());
        if let Some(amount) = amount {
            out.push(':');
            amount.write(out);
        }
        out.push('|');
    }
}

impl From<&Item> for Subject {
    fn from(item: &Item) -> Self {
        Subject::Item(item.name().to_owned())
    }
}

impl From<&Category> for Subject {
    fn from(category: &Category) -> Self {
        Subject::Category(category.name().to_owned())
    }
}

/// How much of a subject is needed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Amount {
    Count(u32),
    /// Percentage text such as `"70%"`, written verbatim.
    Percent(String),
}

impl Amount {
    fn validate(&self) -> Result<(), RequirementError> {
        match self {
            Amount::Count(_) => Ok(()),
            Amount::Percent(text) => {
                let digits = text.strip_suffix('%').unwrap_or_default();
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(RequirementError::InvalidAmount(text.clone()));
                }
                Ok(())
            }
        }
    }

    fn write(&self, out: &mut String) {
        match self {
            Amount::Count(count) => out.push_str(&count.to_string()),
            Amount::Percent(text) => out.push_str(text),
        }
    }
}

impl From<u32> for Amount {
    fn from(count: u32) -> Self {
        Amount::Count(count)
    }
}

impl From<&str> for Amount {
    /// Plain integers become counts; anything else is kept as percentage text
    /// and checked at compile time.
    fn from(text: &str) -> Self {
        text.parse()
            .map(Amount::Count)
            .unwrap_or_else(|_| Amount::Percent(text.to_owned()))
    }
}

impl From<String> for Amount {
    fn from(text: String) -> Self {
        Amount::from(text.as_str())
    }
}

/// Infix operator joining the operands of a combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Operator {
    And,
    Or,
}

/// Engine-side macro wrapping an option-dependent requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum GateKind {
    /// Satisfied when any referenced dependency is.
    OptOne,
    /// Satisfied when all referenced dependencies are.
    OptAll,
}

/// A structured unlock condition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Requirement {
    Subject(Subject),
    Threshold { subject: Subject, amount: Amount },
    Combination {
        operator: Operator,
        operands: Vec<Requirement>,
    },
    OptionGate {
        kind: GateKind,
        inner: Box<Requirement>,
    },
    /// Author-supplied grammar text, emitted unchanged and never re-parsed.
    Raw(String),
}

impl Requirement {
    /// Qualifies a subject node with an amount.
    ///
    /// # Errors
    ///
    /// Only a bare subject can carry an amount; any other node (including a
    /// threshold that already has one) yields
    /// [`RequirementError::AmountOnNonSubject`].
    pub fn with_amount(self, amount: impl Into<Amount>) -> Result<Self, RequirementError> {
        match self {
            Requirement::Subject(subject) => Ok(Requirement::Threshold {
                subject,
                amount: amount.into(),
            }),
            other => Err(RequirementError::AmountOnNonSubject {
                node: other.kind_name(),
            }),
        }
    }

    /// Compiles this requirement into its canonical string.
    pub fn compile(&self) -> Result<String, RequirementError> {
        let mut out = String::new();
        self.write(&mut out)?;
        Ok(out)
    }

    fn write(&self, out: &mut String) -> Result<(), RequirementError> {
        match self {
            Requirement::Subject(subject) => {
                subject.validate()?;
                subject.write(None, out);
            }
            Requirement::Threshold { subject, amount } => {
                subject.validate()?;
                amount.validate()?;
                subject.write(Some(amount), out);
            }
            Requirement::Combination { operator, operands } => {
                if operands.len() < 2 {
                    return Err(RequirementError::TooFewOperands {
                        operator: *operator,
                        count: operands.len(),
                    });
                }
                out.push('(');
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                        out.push_str(operator.as_ref());
                        out.push(' ');
                    }
                    operand.write(out)?;
                }
                out.push(')');
            }
            Requirement::OptionGate { kind, inner } => {
                out.push('{');
                out.push_str(kind.as_ref());
                out.push('(');
                inner.write(out)?;
                out.push_str(")}");
            }
            Requirement::Raw(text) => out.push_str(text),
        }
        Ok(())
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Requirement::Subject(_) => "subject",
            Requirement::Threshold { .. } => "threshold",
            Requirement::Combination { .. } => "combination",
            Requirement::OptionGate { .. } => "option gate",
            Requirement::Raw(_) => "raw string",
        }
    }
}

impl From<Subject> for Requirement {
    fn from(subject: Subject) -> Self {
        Requirement::Subject(subject)
    }
}

impl From<&Item> for Requirement {
    fn from(item: &Item) -> Self {
        Requirement::Subject(item.into())
    }
}

impl From<&Category> for Requirement {
    fn from(category: &Category) -> Self {
        Requirement::Subject(category.into())
    }
}

impl From<&str> for Requirement {
    fn from(text: &str) -> Self {
        Requirement::Raw(text.to_owned())
    }
}

impl From<String> for Requirement {
    fn from(text: String) -> Self {
        Requirement::Raw(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{CategoryArgs, ItemArgs};

    #[test]
    fn item_subject() {
        let orange = Item::new("Orange", ItemArgs::default()).unwrap();
        assert_eq!(Requirement::from(&orange).compile().unwrap(), "|Orange|");
    }

    #[test]
    fn category_threshold_keeps_percentage_verbatim() {
        let oranges = Category::new("Oranges", CategoryArgs::default()).unwrap();
        assert_eq!(
            some_of(&oranges, "70%").compile().unwrap(),
            "|@Oranges:70%|"
        );
        assert_eq!(some_of(&oranges, 3u32).compile().unwrap(), "|@Oranges:3|");
    }

    #[test]
    fn combination_is_parenthesized() {
        let requirement = all_of(vec![item("A"), item("B")]);
        assert_eq!(requirement.compile().unwrap(), "(|A| and |B|)");
    }

    #[test]
    fn nested_combinations_are_fully_parenthesized() {
        let requirement = any_of(vec![
            all_of(vec![item("A"), category("B")]),
            item("C"),
            any_of(vec![item("D"), all_of(vec![item("E"), item("F")])]),
        ]);
        assert_eq!(
            requirement.compile().unwrap(),
            "((|A| and |@B|) or |C| or (|D| or (|E| and |F|)))"
        );
    }

    #[test]
    fn option_gates_wrap_inner_requirement() {
        assert_eq!(
            opt_one(item("Kai")).compile().unwrap(),
            "{OptOne(|Kai|)}"
        );
        assert_eq!(
            opt_all(all_of(vec![item("A"), item("B")])).compile().unwrap(),
            "{OptAll((|A| and |B|))}"
        );
    }

    #[test]
    fn raw_text_passes_through() {
        let text = "{YamlEnabled(hard_mode)} and |Key|";
        assert_eq!(raw(text).compile().unwrap(), text);
    }

    #[test]
    fn compilation_is_deterministic() {
        let requirement = any_of(vec![some_of(Subject::Item("Orange".into()), 5u32), raw("|X|")]);
        assert_eq!(requirement.compile(), requirement.clone().compile());
    }

    #[test]
    fn too_few_operands_fail() {
        assert_eq!(
            all_of(Vec::new()).compile(),
            Err(RequirementError::TooFewOperands {
                operator: Operator::And,
                count: 0
            })
        );
    }

    #[test]
    fn amount_on_non_subject_fails() {
        assert_eq!(
            raw("|A|").with_amount(2u32),
            Err(RequirementError::AmountOnNonSubject { node: "raw string" })
        );
        assert_eq!(
            some_of(Subject::Item("A".into()), 2u32).with_amount(3u32),
            Err(RequirementError::AmountOnNonSubject { node: "threshold" })
        );
        assert!(item("A").with_amount("50%").is_ok());
    }

    #[test]
    fn malformed_amounts_and_names_fail() {
        assert_eq!(
            some_of(Subject::Item("A".into()), "lots").compile(),
            Err(RequirementError::InvalidAmount("lots".into()))
        );
        assert_eq!(
            some_of(Subject::Item("A".into()), "%").compile(),
            Err(RequirementError::InvalidAmount("%".into()))
        );
        assert_eq!(item("").compile(), Err(RequirementError::EmptyName));
        assert_eq!(
            item("A|B").compile(),
            Err(RequirementError::ReservedCharacter {
                name: "A|B".into(),
                character: '|'
            })
        );
        assert_eq!(
            item("@Lemons").compile(),
            Err(RequirementError::AmbiguousName {
                name: "@Lemons".into()
            })
        );
        assert_eq!(
            item("Level:2").compile(),
            Err(RequirementError::AmbiguousName {
                name: "Level:2".into()
            })
        );
        assert_eq!(
            some_of(Subject::Category("Tier:50%".into()), 1u32).compile(),
            Err(RequirementError::AmbiguousName {
                name: "Tier:50%".into()
            })
        );
    }

    #[test]
    fn names_that_only_look_special_compile() {
        assert_eq!(category("@Lemons").compile().unwrap(), "|@@Lemons|");
        assert_eq!(item("Kai: Win a match").compile().unwrap(), "|Kai: Win a match|");
        assert_eq!(item("Lemons@").compile().unwrap(), "|Lemons@|");
    }
}
