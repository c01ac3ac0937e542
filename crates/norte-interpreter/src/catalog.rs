//! Entity catalog: fixed field lists for well-known domain entities.
//!
//! Lookup is substring-based against the lowercased prompt, longest key
//! winning, so "tarefas" beats "tarefa" when both appear. This is
//! intentionally not whole-word matching; callers depend on the
//! substring+longest-wins behavior.

use norte_core::{Field, FieldType};

/// Catalog keys, singular and plural forms spelled out.
const KEYS: &[&str] = &[
    "produto",
    "produtos",
    "usuario",
    "usuarios",
    "cliente",
    "clientes",
    "pedido",
    "pedidos",
    "categoria",
    "categorias",
    "fornecedor",
    "fornecedores",
    "projeto",
    "projetos",
    "tarefa",
    "tarefas",
];

/// Field list for the longest catalog key contained in the lowercased prompt,
/// or `None` when no key matches.
pub fn lookup_fields(lower_prompt: &str) -> Option<Vec<Field>> {
    KEYS.iter()
        .filter(|key| lower_prompt.contains(*key))
        .max_by_key(|key| key.len())
        .map(|key| fields_for(key))
}

/// Three-field fallback used for unknown entities and generic screens.
pub fn default_fields() -> Vec<Field> {
    vec![
        Field::text("name", "Nome").required(),
        Field::text("description", "Descrição"),
        Field::select("status", "Status", ["Ativo", "Inativo"]),
    ]
}

fn fields_for(key: &str) -> Vec<Field> {
    match key {
        "produto" | "produtos" => vec![
            Field::text("nome", "Nome")
                .required()
                .with_min_length(3)
                .with_placeholder("Nome do produto"),
            Field::text("sku", "SKU").required().with_pattern(
                "^[A-Z0-9-]+$",
                "SKU deve conter apenas letras maiúsculas, números e hífens",
            ),
            Field::new("preco", "Preço", FieldType::Number).required(),
            Field::select(
                "categoria",
                "Categoria",
                ["Eletrônicos", "Vestuário", "Alimentos", "Outros"],
            ),
            Field::new("ativo", "Ativo", FieldType::Switch),
        ],
        "usuario" | "usuarios" => vec![
            Field::text("nome", "Nome").required().with_min_length(3),
            Field::new("email", "E-mail", FieldType::Email).required(),
            Field::select("perfil", "Perfil", ["Administrador", "Editor", "Leitor"]),
            Field::new("ativo", "Ativo", FieldType::Checkbox),
        ],
        "cliente" | "clientes" => vec![
            Field::text("nome", "Nome").required(),
            Field::new("email", "E-mail", FieldType::Email).required(),
            Field::text("telefone", "Telefone").with_placeholder("(00) 00000-0000"),
            Field::radio("tipo", "Tipo", ["Pessoa Física", "Pessoa Jurídica"]),
        ],
        "pedido" | "pedidos" => vec![
            Field::text("numero", "Número").required(),
            Field::text("cliente", "Cliente").required(),
            Field::new("data", "Data", FieldType::Date),
            Field::select(
                "status",
                "Status",
                ["Aberto", "Faturado", "Entregue", "Cancelado"],
            ),
        ],
        "categoria" | "categorias" => vec![
            Field::text("nome", "Nome").required(),
            Field::text("descricao", "Descrição"),
            Field::new("ativa", "Ativa", FieldType::Switch),
        ],
        "fornecedor" | "fornecedores" => vec![
            Field::text("razao_social", "Razão Social").required(),
            Field::text("cnpj", "CNPJ").with_pattern(r"^\d{14}$", "CNPJ deve ter 14 dígitos"),
            Field::new("email", "E-mail", FieldType::Email),
            Field::text("telefone", "Telefone"),
        ],
        "projeto" | "projetos" => vec![
            Field::text("nome", "Nome").required(),
            Field::text("responsavel", "Responsável"),
            Field::new("inicio", "Início", FieldType::Date),
            Field::new("fim", "Fim", FieldType::Date),
            Field::select(
                "status",
                "Status",
                ["Planejado", "Em Andamento", "Concluído"],
            ),
        ],
        "tarefa" | "tarefas" => vec![
            Field::text("titulo", "Título").required().with_min_length(3),
            Field::text("descricao", "Descrição"),
            Field::new("prazo", "Prazo", FieldType::Date),
            Field::radio("prioridade", "Prioridade", ["Baixa", "Média", "Alta"]),
            Field::new("concluida", "Concluída", FieldType::Checkbox),
        ],
        _ => default_fields(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_key_wins() {
        // "tarefas" contains "tarefa"; both are substrings of the prompt.
        let fields = lookup_fields("quero gerenciar minhas tarefas diarias").unwrap();
        let tarefas = fields_for("tarefas");
        assert_eq!(fields, tarefas);
    }

    #[test]
    fn substring_match_is_intentional() {
        // "produto" is a substring even inside a longer word.
        assert!(lookup_fields("meus subprodutos favoritos").is_some());
    }

    #[test]
    fn unknown_entity_has_no_entry() {
        assert!(lookup_fields("crud de coisa inexistente").is_none());
    }

    #[test]
    fn produto_catalog_carries_sku() {
        let fields = lookup_fields("crud de produtos").unwrap();
        assert!(fields.iter().any(|f| f.id == "sku"));
    }

    #[test]
    fn default_fields_shape() {
        let fields = default_fields();
        let ids: Vec<&str> = fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["name", "description", "status"]);
        assert_eq!(fields[2].field_type, FieldType::Select);
        assert_eq!(fields[2].options, ["Ativo", "Inativo"]);
    }
}
