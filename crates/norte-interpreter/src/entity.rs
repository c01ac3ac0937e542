//! Entity extraction from free-form prompts.
//!
//! An ordered list of regular-expression rules, evaluated top to bottom with
//! a hard-coded fallback. This is deliberately not a grammar: prompts are
//! short Portuguese phrases and a priority chain covers them.

use regex::Regex;

/// Result of entity detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMatch {
    /// Entity phrase in Title Case, e.g. "Produtos".
    pub entity: String,
    /// The lowercased prompt used for matching, returned so callers can run
    /// further keyword checks without lowercasing again.
    pub lower: String,
}

/// Entity used when no rule matches.
pub const FALLBACK_ENTITY: &str = "itens";

pub(crate) struct EntityRules {
    /// "crud (de)? <phrase>", up to three words, no terminator.
    crud: Regex,
    /// User story: intent verb + action verb + phrase.
    user_story: Regex,
    /// "cadastro/gerenciamento/lista (de)? <phrase>".
    noun_phrase: Regex,
    /// Possessive/article stop-word at the start of a captured phrase.
    leading_stopword: Regex,
}

impl EntityRules {
    pub(crate) fn new() -> Self {
        Self {
            crud: rule(r"crud\s+(?:de\s+)?(\S+(?:\s+\S+){0,2})"),
            user_story: rule(
                r"(?:quero|desejo)\s+(?:cadastrar|gerenciar|listar|editar|remover|criar)\s+(.+?)(?:\s+para\s+|\s+de\s+|,|$)",
            ),
            noun_phrase: rule(
                r"(?:cadastro|gerenciamento|lista)\s+(?:de\s+)?(.+?)(?:\s+para\s+|\s+de\s+|,|$)",
            ),
            leading_stopword: rule(r"^(?:minhas?|meus?|minha|meu|as|os|a|o|um|uma)\s+"),
        }
    }

    /// Extract the entity phrase from a prompt.
    pub(crate) fn detect(&self, prompt: &str) -> EntityMatch {
        let lower = prompt.to_lowercase();

        let phrase = if let Some(captures) = self.crud.captures(&lower) {
            captures[1].to_string()
        } else if let Some(captures) = self
            .user_story
            .captures(&lower)
            .or_else(|| self.noun_phrase.captures(&lower))
        {
            self.strip_stopword(&captures[1])
        } else {
            FALLBACK_ENTITY.to_string()
        };

        // A phrase can strip down to nothing ("quero listar os "); degrade to
        // the fallback instead of returning an empty entity.
        let phrase = if phrase.trim().is_empty() {
            FALLBACK_ENTITY.to_string()
        } else {
            phrase
        };

        EntityMatch {
            entity: title_case(&phrase),
            lower,
        }
    }

    /// Strip one leading possessive/article, only at the start of the phrase.
    fn strip_stopword(&self, phrase: &str) -> String {
        self.leading_stopword.replace(phrase, "").into_owned()
    }
}

/// The rule set is fixed, so a failed compile is a programming error.
fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static entity rule must compile")
}

/// Uppercase the first letter of every whitespace-separated token. No
/// locale-aware particle handling.
pub(crate) fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(prompt: &str) -> EntityMatch {
        EntityRules::new().detect(prompt)
    }

    #[test]
    fn crud_pattern_wins() {
        let m = detect("CRUD de Produtos");
        assert_eq!(m.entity, "Produtos");
        assert_eq!(m.lower, "crud de produtos");
    }

    #[test]
    fn crud_pattern_caps_at_three_words() {
        let m = detect("crud de ordens de serviço abertas hoje");
        assert_eq!(m.entity, "Ordens De Serviço");
    }

    #[test]
    fn user_story_strips_possessive() {
        let m = detect(
            "como admin quero gerenciar minhas tarefas diarias para que eu não perca os prazos de entrega",
        );
        assert_eq!(m.entity, "Tarefas Diarias");
    }

    #[test]
    fn user_story_terminates_at_comma() {
        let m = detect("desejo cadastrar fornecedores, com aprovação");
        assert_eq!(m.entity, "Fornecedores");
    }

    #[test]
    fn noun_phrase_pattern() {
        let m = detect("cadastro de clientes para a loja");
        assert_eq!(m.entity, "Clientes");
    }

    #[test]
    fn stopword_stripped_only_once_at_start() {
        let m = detect("quero listar os pedidos da semana");
        assert_eq!(m.entity, "Pedidos Da Semana");
    }

    #[test]
    fn fallback_is_itens() {
        let m = detect("Qualquer texto genérico");
        assert_eq!(m.entity, "Itens");
    }

    #[test]
    fn title_case_every_token() {
        assert_eq!(title_case("ordens de serviço"), "Ordens De Serviço");
        assert_eq!(title_case("  tarefas   diarias "), "Tarefas Diarias");
        assert_eq!(title_case(""), "");
    }
}
