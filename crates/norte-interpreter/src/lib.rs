//! Rule-based prompt interpretation for the Norte scaffold generator.
//!
//! Pure functions from free text to a [`ScreenSpec`]: entity-name extraction,
//! screen-type classification (login / CRUD / generic) and field-list
//! resolution via a catalog keyed by the detected entity. No I/O, no clock,
//! no randomness; a fixed `(prompt, stack)` pair always yields a deep-equal
//! spec, and no input ever makes these functions fail.

pub mod catalog;
pub mod entity;

pub use entity::{EntityMatch, FALLBACK_ENTITY};

use entity::EntityRules;
use norte_core::{Field, FieldType, ScreenSpec, ScreenType, Stack, Theme};
use regex::Regex;
use std::sync::OnceLock;

/// Compiled rule set for prompt interpretation.
///
/// Construction compiles the fixed regexes once; the struct is then cheap to
/// reuse and safe to share. The free functions [`detect_entity`] and
/// [`build_spec_from_prompt`] use a process-wide instance.
pub struct Interpreter {
    entity_rules: EntityRules,
    login_keywords: Regex,
    crud_keywords: Regex,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            entity_rules: EntityRules::new(),
            login_keywords: keyword_rule("login|acesso|entrar"),
            crud_keywords: keyword_rule("crud|listar|cadastrar|editar|remover|gerenciar|criar"),
        }
    }

    fn shared() -> &'static Self {
        static SHARED: OnceLock<Interpreter> = OnceLock::new();
        SHARED.get_or_init(Self::new)
    }

    /// Extract the entity phrase from a prompt. See [`entity`] for the rule
    /// order.
    pub fn detect_entity(&self, prompt: &str) -> EntityMatch {
        self.entity_rules.detect(prompt)
    }

    /// Build a full screen specification from a prompt and a target stack.
    pub fn build_spec(&self, prompt: &str, stack: Stack) -> ScreenSpec {
        let EntityMatch { entity, lower } = self.detect_entity(prompt);

        // Login wins over CRUD when both keyword sets match; this priority is
        // part of the observable contract for ambiguous prompts.
        if self.login_keywords.is_match(&lower) {
            return self.login_spec(prompt, stack);
        }
        if self.crud_keywords.is_match(&lower) {
            return self.crud_spec(prompt, stack, entity, &lower);
        }
        self.generic_spec(prompt, stack)
    }

    fn login_spec(&self, prompt: &str, stack: Stack) -> ScreenSpec {
        ScreenSpec {
            screen_type: ScreenType::Login,
            title: "Acesso ao Sistema".to_string(),
            subtitle: "Entre com suas credenciais para continuar".to_string(),
            entity: "Acesso".to_string(),
            fields: vec![
                Field::new("email", "E-mail", FieldType::Email)
                    .required()
                    .with_placeholder("voce@empresa.com"),
                Field::new("password", "Senha", FieldType::Password)
                    .required()
                    .with_min_length(6),
            ],
            list_columns: Vec::new(),
            features: vec![
                "Formulário de acesso".to_string(),
                "Validação de campos".to_string(),
            ],
            stack,
            prompt: prompt.to_string(),
            theme: Theme::Norte,
        }
    }

    fn crud_spec(&self, prompt: &str, stack: Stack, entity: String, lower: &str) -> ScreenSpec {
        let fields = catalog::lookup_fields(lower).unwrap_or_else(catalog::default_fields);
        let list_columns: Vec<String> = fields.iter().map(|f| f.label.clone()).collect();

        ScreenSpec {
            screen_type: ScreenType::Crud,
            title: format!("CRUD de {entity}"),
            subtitle: format!("Gerencie seus registros de {entity}"),
            entity,
            fields,
            list_columns,
            features: crud_features(),
            stack,
            prompt: prompt.to_string(),
            theme: Theme::Norte,
        }
    }

    fn generic_spec(&self, prompt: &str, stack: Stack) -> ScreenSpec {
        ScreenSpec {
            screen_type: ScreenType::Generic,
            title: "Tela Gerada".to_string(),
            subtitle: "Ajuste os campos conforme a sua necessidade".to_string(),
            entity: "Itens".to_string(),
            fields: catalog::default_fields(),
            list_columns: vec![
                "Nome".to_string(),
                "Descrição".to_string(),
                "Status".to_string(),
            ],
            features: crud_features(),
            stack,
            prompt: prompt.to_string(),
            theme: Theme::Norte,
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn crud_features() -> Vec<String> {
    ["Listagem com busca", "Cadastro", "Edição", "Exclusão"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn keyword_rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static keyword rule must compile")
}

/// Extract the entity phrase from a prompt.
pub fn detect_entity(prompt: &str) -> EntityMatch {
    Interpreter::shared().detect_entity(prompt)
}

/// Build a full screen specification from a prompt and a target stack.
pub fn build_spec_from_prompt(prompt: &str, stack: Stack) -> ScreenSpec {
    Interpreter::shared().build_spec(prompt, stack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_prompt() {
        let spec = build_spec_from_prompt("Tela de login para acesso ao sistema", Stack::React);
        assert_eq!(spec.screen_type, ScreenType::Login);
        assert_eq!(spec.title, "Acesso ao Sistema");
        assert_eq!(spec.entity, "Acesso");
        let ids: Vec<&str> = spec.fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["email", "password"]);
        assert!(spec.list_columns.is_empty());
    }

    #[test]
    fn login_wins_over_crud() {
        let spec = build_spec_from_prompt("tela de login para cadastrar acessos", Stack::Vue);
        assert_eq!(spec.screen_type, ScreenType::Login);
    }

    #[test]
    fn crud_prompt_with_catalog_entity() {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::React);
        assert_eq!(spec.screen_type, ScreenType::Crud);
        assert_eq!(spec.entity, "Produtos");
        assert_eq!(spec.title, "CRUD de Produtos");
        assert!(spec.fields.iter().any(|f| f.id == "sku"));
        assert_eq!(spec.list_columns, spec.field_labels());
    }

    #[test]
    fn crud_prompt_with_unknown_entity_uses_default_fields() {
        let spec = build_spec_from_prompt("CRUD de coisa inexistente", Stack::React);
        let ids: Vec<&str> = spec.fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["name", "description", "status"]);
        assert_eq!(spec.fields[2].field_type, FieldType::Select);
        assert_eq!(spec.fields[2].options, ["Ativo", "Inativo"]);
    }

    #[test]
    fn generic_prompt() {
        let spec = build_spec_from_prompt("Uma tela qualquer de relatório", Stack::React);
        assert_eq!(spec.screen_type, ScreenType::Generic);
        assert_eq!(spec.entity, "Itens");
        assert_eq!(spec.list_columns, ["Nome", "Descrição", "Status"]);
    }

    #[test]
    fn stack_and_prompt_pass_through() {
        let prompt = "quero gerenciar minhas tarefas diarias";
        let spec = build_spec_from_prompt(prompt, Stack::Angular);
        assert_eq!(spec.stack, Stack::Angular);
        assert_eq!(spec.prompt, prompt);
        assert_eq!(spec.entity, "Tarefas Diarias");
    }

    #[test]
    fn interpretation_is_deterministic() {
        let first = build_spec_from_prompt("CRUD de pedidos", Stack::Bootstrap);
        let second = build_spec_from_prompt("CRUD de pedidos", Stack::Bootstrap);
        assert_eq!(first, second);
    }

    #[test]
    fn crud_theme_defaults_to_norte() {
        let spec = build_spec_from_prompt("CRUD de clientes", Stack::Vue);
        assert_eq!(spec.theme, Theme::Norte);
    }
}
