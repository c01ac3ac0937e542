//! Static Bootstrap page emitter.
//!
//! The whole project is one `index.html`: Bootstrap loaded from a CDN, the
//! theme stylesheet inlined in a `<style>` block, and the CRUD behavior in a
//! vanilla-JS `<script>` block. No build step; the file opens directly in a
//! browser.

use super::{readme, Emitter, GeneratedProject};
use crate::directive::{column_bindings, compile_rules, seed_rows, widget_for, WidgetDirective};
use crate::error::Result;
use crate::templates::{html_escape, js_string};
use crate::theme::stylesheet;
use norte_core::{Field, ScreenSpec, ScreenType, Stack};

const BOOTSTRAP_CSS_CDN: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Static HTML page emitter with Bootstrap via CDN.
pub struct BootstrapEmitter;

impl BootstrapEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BootstrapEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for BootstrapEmitter {
    fn stack(&self) -> Stack {
        Stack::Bootstrap
    }

    fn emit(&self, spec: &ScreenSpec) -> Result<GeneratedProject> {
        let mut project = GeneratedProject::new();
        project.insert("index.html", page(spec));
        project.insert(
            "README.md",
            readme(
                spec,
                "HTML + Bootstrap",
                &["abra `index.html` no navegador"],
            ),
        );
        Ok(project)
    }
}

fn page(spec: &ScreenSpec) -> String {
    let mut lines = vec![
        "<!doctype html>".to_string(),
        "<html lang=\"pt-BR\">".to_string(),
        "  <head>".to_string(),
        "    <meta charset=\"UTF-8\" />".to_string(),
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />".to_string(),
        format!("    <title>{}</title>", html_escape(&spec.title)),
        format!("    <link rel=\"stylesheet\" href=\"{BOOTSTRAP_CSS_CDN}\" />"),
        "    <style>".to_string(),
    ];
    for line in stylesheet(spec.theme).lines() {
        if line.is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("      {line}"));
        }
    }
    lines.push("      .login-card {".to_string());
    lines.push("        max-width: 420px;".to_string());
    lines.push("        margin: 48px auto 0;".to_string());
    lines.push("      }".to_string());
    lines.push("    </style>".to_string());
    lines.push("  </head>".to_string());
    lines.push("  <body>".to_string());

    match spec.screen_type {
        ScreenType::Login => lines.extend(login_body(spec)),
        _ => lines.extend(crud_body(spec)),
    }

    lines.push("  </body>".to_string());
    lines.push("</html>".to_string());
    lines.join("\n") + "\n"
}

fn crud_body(spec: &ScreenSpec) -> Vec<String> {
    let mut lines = vec![
        "    <div class=\"app-shell\">".to_string(),
        "      <header>".to_string(),
        format!("        <p class=\"eyebrow\">{}</p>", html_escape(&spec.entity)),
        format!(
            "        <h1 class=\"page-title\">{}</h1>",
            html_escape(&spec.title)
        ),
        format!(
            "        <p class=\"page-subtitle\">{}</p>",
            html_escape(&spec.subtitle)
        ),
        "      </header>".to_string(),
        String::new(),
        "      <section class=\"card\">".to_string(),
        format!(
            "        <h2 class=\"card-title\">Lista de {}</h2>",
            html_escape(&spec.entity)
        ),
        "        <div class=\"toolbar\">".to_string(),
        "          <input id=\"search\" class=\"input\" type=\"text\" placeholder=\"Buscar...\" />".to_string(),
        "        </div>".to_string(),
        "        <div class=\"table-responsive\">".to_string(),
        "          <table class=\"data-table\">".to_string(),
        "            <thead>".to_string(),
        "              <tr>".to_string(),
    ];
    for column in &spec.list_columns {
        lines.push(format!("                <th>{}</th>", html_escape(column)));
    }
    lines.push("                <th>Ações</th>".to_string());
    lines.push("              </tr>".to_string());
    lines.push("            </thead>".to_string());
    lines.push("            <tbody id=\"rows\"></tbody>".to_string());
    lines.push("          </table>".to_string());
    lines.push("        </div>".to_string());
    lines.push("      </section>".to_string());
    lines.push(String::new());

    lines.push("      <section id=\"detail-card\" class=\"card\" hidden>".to_string());
    lines.push("        <h2 class=\"card-title\">Detalhes</h2>".to_string());
    lines.push("        <dl id=\"detail-list\" class=\"detail-list\"></dl>".to_string());
    lines.push(
        "        <button type=\"button\" class=\"btn\" onclick=\"closeDetail()\">Fechar</button>"
            .to_string(),
    );
    lines.push("      </section>".to_string());
    lines.push(String::new());

    lines.push("      <section class=\"card\">".to_string());
    lines.push("        <h2 id=\"form-title\" class=\"card-title\">Novo registro</h2>".to_string());
    lines.push("        <p id=\"form-error\" class=\"form-error\" hidden></p>".to_string());
    lines.push("        <form id=\"record-form\">".to_string());
    for field in &spec.fields {
        lines.extend(field_markup(field, 10));
    }
    lines.push("          <div class=\"actions\">".to_string());
    lines.push(
        "            <button type=\"submit\" class=\"btn btn-primary\">Salvar</button>".to_string(),
    );
    lines.push(
        "            <button type=\"button\" class=\"btn\" onclick=\"resetForm()\">Limpar</button>"
            .to_string(),
    );
    lines.push("          </div>".to_string());
    lines.push("        </form>".to_string());
    lines.push("      </section>".to_string());
    lines.push("    </div>".to_string());
    lines.push(String::new());
    lines.push("    <script>".to_string());
    lines.extend(crud_script(spec));
    lines.push("    </script>".to_string());
    lines
}

fn login_body(spec: &ScreenSpec) -> Vec<String> {
    let mut lines = vec![
        "    <div class=\"app-shell\">".to_string(),
        "      <section class=\"card login-card\">".to_string(),
        format!("        <p class=\"eyebrow\">{}</p>", html_escape(&spec.entity)),
        format!(
            "        <h1 class=\"page-title\">{}</h1>",
            html_escape(&spec.title)
        ),
        format!(
            "        <p class=\"page-subtitle\">{}</p>",
            html_escape(&spec.subtitle)
        ),
        "        <p id=\"form-error\" class=\"form-error\" hidden></p>".to_string(),
        "        <form id=\"record-form\">".to_string(),
    ];
    for field in &spec.fields {
        lines.extend(field_markup(field, 10));
    }
    lines.push(
        "          <button type=\"submit\" class=\"btn btn-primary\">Entrar</button>".to_string(),
    );
    lines.push("        </form>".to_string());
    lines.push("      </section>".to_string());
    lines.push("    </div>".to_string());
    lines.push(String::new());
    lines.push("    <script>".to_string());
    lines.extend(login_script(spec));
    lines.push("    </script>".to_string());
    lines
}

/// Markup for one form control. Non-radio controls carry `id="field-<id>"`;
/// radios share `name="<id>"` and are read via `:checked`.
fn field_markup(field: &Field, indent: usize) -> Vec<String> {
    let p = " ".repeat(indent);
    let id = html_escape(&field.id);
    let label = html_escape(&field.label);
    let mut lines = Vec::new();

    match widget_for(field) {
        WidgetDirective::Text { input_type } => {
            let placeholder = field
                .placeholder
                .as_deref()
                .map(|text| format!(" placeholder=\"{}\"", html_escape(text)))
                .unwrap_or_default();
            lines.push(format!("{p}<label class=\"field\">"));
            lines.push(format!("{p}  <span class=\"field-label\">{label}</span>"));
            lines.push(format!(
                "{p}  <input id=\"field-{id}\" class=\"input\" type=\"{input_type}\"{placeholder} />"
            ));
            lines.push(format!("{p}</label>"));
        }
        WidgetDirective::Select { options } => {
            lines.push(format!("{p}<label class=\"field\">"));
            lines.push(format!("{p}  <span class=\"field-label\">{label}</span>"));
            lines.push(format!("{p}  <select id=\"field-{id}\" class=\"input\">"));
            lines.push(format!("{p}    <option value=\"\">Selecione</option>"));
            for option in &options {
                let escaped = html_escape(option);
                lines.push(format!(
                    "{p}    <option value=\"{escaped}\">{escaped}</option>"
                ));
            }
            lines.push(format!("{p}  </select>"));
            lines.push(format!("{p}</label>"));
        }
        WidgetDirective::Radio { options } => {
            lines.push(format!("{p}<div class=\"field\">"));
            lines.push(format!("{p}  <span class=\"field-label\">{label}</span>"));
            lines.push(format!("{p}  <div class=\"radio-group\">"));
            for option in &options {
                let escaped = html_escape(option);
                lines.push(format!("{p}    <label>"));
                lines.push(format!(
                    "{p}      <input type=\"radio\" name=\"{id}\" value=\"{escaped}\" /> {escaped}"
                ));
                lines.push(format!("{p}    </label>"));
            }
            lines.push(format!("{p}  </div>"));
            lines.push(format!("{p}</div>"));
        }
        WidgetDirective::Checkbox | WidgetDirective::Switch => {
            let class = if matches!(widget_for(field), WidgetDirective::Switch) {
                " class=\"switch-input\""
            } else {
                ""
            };
            lines.push(format!("{p}<label class=\"check-field\">"));
            lines.push(format!(
                "{p}  <input id=\"field-{id}\" type=\"checkbox\"{class} />"
            ));
            lines.push(format!("{p}  <span class=\"field-label\">{label}</span>"));
            lines.push(format!("{p}</label>"));
        }
    }

    lines
}

/// Field metadata for the page script: how each control is read and written.
fn fields_literal(fields: &[Field]) -> Vec<String> {
    let mut lines = vec!["const FIELDS = [".to_string()];
    for field in fields {
        let kind = match widget_for(field) {
            WidgetDirective::Radio { .. } => "radio",
            WidgetDirective::Checkbox | WidgetDirective::Switch => "check",
            _ => "value",
        };
        lines.push(format!(
            "  {{ id: {}, kind: {} }},",
            js_string(&field.id),
            js_string(kind)
        ));
    }
    lines.push("];".to_string());
    lines
}

fn validation_literal(spec: &ScreenSpec) -> Vec<String> {
    let mut lines = vec!["const RULES = [".to_string()];
    for rule in compile_rules(&spec.fields) {
        let record = serde_json::to_string(&rule).unwrap_or_default();
        lines.push(format!("  {record},"));
    }
    lines.push("];".to_string());
    lines.push(String::new());
    lines.push("function validate(values) {".to_string());
    lines.push("  for (const rule of RULES) {".to_string());
    lines.push("    const value = values[rule.id] ?? '';".to_string());
    lines.push("    if (rule.required && value.trim() === '') {".to_string());
    lines.push("      return 'Preencha: ' + rule.label;".to_string());
    lines.push("    }".to_string());
    lines.push("    if (rule.minLength !== undefined && value.length < rule.minLength) {".to_string());
    lines.push(
        "      return rule.label + ' deve ter no mínimo ' + rule.minLength + ' caracteres';"
            .to_string(),
    );
    lines.push("    }".to_string());
    lines.push("    if (rule.maxLength !== undefined && value.length > rule.maxLength) {".to_string());
    lines.push(
        "      return rule.label + ' deve ter no máximo ' + rule.maxLength + ' caracteres';"
            .to_string(),
    );
    lines.push("    }".to_string());
    lines.push(
        "    if (rule.pattern && value !== '' && !new RegExp(rule.pattern).test(value)) {"
            .to_string(),
    );
    lines.push("      return rule.patternMessage ?? 'Valor inválido para ' + rule.label;".to_string());
    lines.push("    }".to_string());
    lines.push("  }".to_string());
    lines.push("  return null;".to_string());
    lines.push("}".to_string());
    lines
}

fn form_io_script() -> Vec<String> {
    vec![
        "function readForm() {".to_string(),
        "  const values = {};".to_string(),
        "  for (const field of FIELDS) {".to_string(),
        "    if (field.kind === 'radio') {".to_string(),
        "      const checked = document.querySelector('input[name=\"' + field.id + '\"]:checked');".to_string(),
        "      values[field.id] = checked ? checked.value : '';".to_string(),
        "    } else if (field.kind === 'check') {".to_string(),
        "      values[field.id] = document.getElementById('field-' + field.id).checked ? 'on' : '';".to_string(),
        "    } else {".to_string(),
        "      values[field.id] = document.getElementById('field-' + field.id).value;".to_string(),
        "    }".to_string(),
        "  }".to_string(),
        "  return values;".to_string(),
        "}".to_string(),
        String::new(),
        "function writeForm(values) {".to_string(),
        "  for (const field of FIELDS) {".to_string(),
        "    const value = values[field.id] ?? '';".to_string(),
        "    if (field.kind === 'radio') {".to_string(),
        "      for (const input of document.querySelectorAll('input[name=\"' + field.id + '\"]')) {".to_string(),
        "        input.checked = input.value === value;".to_string(),
        "      }".to_string(),
        "    } else if (field.kind === 'check') {".to_string(),
        "      document.getElementById('field-' + field.id).checked = value === 'on';".to_string(),
        "    } else {".to_string(),
        "      document.getElementById('field-' + field.id).value = value;".to_string(),
        "    }".to_string(),
        "  }".to_string(),
        "}".to_string(),
        String::new(),
        "function showError(message) {".to_string(),
        "  const box = document.getElementById('form-error');".to_string(),
        "  box.textContent = message ?? '';".to_string(),
        "  box.hidden = message === null;".to_string(),
        "}".to_string(),
    ]
}

fn crud_script(spec: &ScreenSpec) -> Vec<String> {
    let mut lines = fields_literal(&spec.fields);
    lines.push(String::new());

    lines.push("const COLUMN_FIELDS = [".to_string());
    for (_, field_id) in column_bindings(spec) {
        match field_id {
            Some(id) => lines.push(format!("  {},", js_string(&id))),
            None => lines.push("  null,".to_string()),
        }
    }
    lines.push("];".to_string());
    lines.push(String::new());

    lines.extend(validation_literal(spec));
    lines.push(String::new());

    lines.push("let items = [".to_string());
    for row in seed_rows(&spec.fields) {
        let pairs: Vec<String> = row
            .values
            .iter()
            .map(|(id, value)| format!("{}: {}", js_string(id), js_string(value)))
            .collect();
        lines.push(format!(
            "  {{ id: {}, values: {{ {} }} }},",
            row.id,
            pairs.join(", ")
        ));
    }
    lines.push("];".to_string());
    lines.push("let editingId = null;".to_string());
    lines.push("let viewingId = null;".to_string());
    lines.push(String::new());

    lines.extend(form_io_script());
    lines.push(String::new());

    lines.push("function renderRows() {".to_string());
    lines.push("  const needle = document.getElementById('search').value.toLowerCase();".to_string());
    lines.push("  const visible = items.filter((item) =>".to_string());
    lines.push(
        "    Object.values(item.values).some((value) => value.toLowerCase().includes(needle)),"
            .to_string(),
    );
    lines.push("  );".to_string());
    lines.push("  const body = document.getElementById('rows');".to_string());
    lines.push("  body.innerHTML = '';".to_string());
    lines.push("  if (visible.length === 0) {".to_string());
    lines.push("    const row = document.createElement('tr');".to_string());
    lines.push("    const cell = document.createElement('td');".to_string());
    lines.push("    cell.className = 'empty-row';".to_string());
    lines.push(format!(
        "    cell.colSpan = {};",
        spec.list_columns.len() + 1
    ));
    lines.push("    cell.textContent = 'Nenhum registro encontrado';".to_string());
    lines.push("    row.appendChild(cell);".to_string());
    lines.push("    body.appendChild(row);".to_string());
    lines.push("    return;".to_string());
    lines.push("  }".to_string());
    lines.push("  for (const item of visible) {".to_string());
    lines.push("    const row = document.createElement('tr');".to_string());
    lines.push("    for (const fieldId of COLUMN_FIELDS) {".to_string());
    lines.push("      const cell = document.createElement('td');".to_string());
    lines.push(
        "      cell.textContent = fieldId === null ? '—' : (item.values[fieldId] || '—');"
            .to_string(),
    );
    lines.push("      row.appendChild(cell);".to_string());
    lines.push("    }".to_string());
    lines.push("    const actions = document.createElement('td');".to_string());
    lines.push("    actions.innerHTML =".to_string());
    lines.push("      '<div class=\"actions\">' +".to_string());
    lines.push(
        "      '<button type=\"button\" class=\"btn\" onclick=\"openDetail(' + item.id + ')\">Ver</button>' +"
            .to_string(),
    );
    lines.push(
        "      '<button type=\"button\" class=\"btn\" onclick=\"startEdit(' + item.id + ')\">Editar</button>' +"
            .to_string(),
    );
    lines.push(
        "      '<button type=\"button\" class=\"btn btn-danger\" onclick=\"removeItem(' + item.id + ')\">Excluir</button>' +"
            .to_string(),
    );
    lines.push("      '</div>';".to_string());
    lines.push("    row.appendChild(actions);".to_string());
    lines.push("    body.appendChild(row);".to_string());
    lines.push("  }".to_string());
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("function renderDetail() {".to_string());
    lines.push("  const card = document.getElementById('detail-card');".to_string());
    lines.push("  const item = items.find((candidate) => candidate.id === viewingId);".to_string());
    lines.push("  if (!item) {".to_string());
    lines.push("    card.hidden = true;".to_string());
    lines.push("    return;".to_string());
    lines.push("  }".to_string());
    lines.push("  const list = document.getElementById('detail-list');".to_string());
    lines.push("  list.innerHTML = '';".to_string());
    lines.push("  for (const field of FIELDS) {".to_string());
    lines.push("    const term = document.createElement('dt');".to_string());
    lines.push("    term.textContent = LABELS[field.id];".to_string());
    lines.push("    const detail = document.createElement('dd');".to_string());
    lines.push("    detail.textContent = item.values[field.id] || '—';".to_string());
    lines.push("    list.appendChild(term);".to_string());
    lines.push("    list.appendChild(detail);".to_string());
    lines.push("  }".to_string());
    lines.push("  card.hidden = false;".to_string());
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("const LABELS = {".to_string());
    for field in &spec.fields {
        lines.push(format!(
            "  {}: {},",
            js_string(&field.id),
            js_string(&field.label)
        ));
    }
    lines.push("};".to_string());
    lines.push(String::new());

    lines.push("function openDetail(id) {".to_string());
    lines.push("  viewingId = id;".to_string());
    lines.push("  renderDetail();".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("function closeDetail() {".to_string());
    lines.push("  viewingId = null;".to_string());
    lines.push("  renderDetail();".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("function resetForm() {".to_string());
    lines.push("  editingId = null;".to_string());
    lines.push("  writeForm({});".to_string());
    lines.push("  showError(null);".to_string());
    lines.push("  document.getElementById('form-title').textContent = 'Novo registro';".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("function startEdit(id) {".to_string());
    lines.push("  const item = items.find((candidate) => candidate.id === id);".to_string());
    lines.push("  if (!item) {".to_string());
    lines.push("    return;".to_string());
    lines.push("  }".to_string());
    lines.push("  editingId = id;".to_string());
    lines.push("  writeForm(item.values);".to_string());
    lines.push("  showError(null);".to_string());
    lines.push(
        "  document.getElementById('form-title').textContent = 'Editar registro';".to_string(),
    );
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("function removeItem(id) {".to_string());
    lines.push("  items = items.filter((item) => item.id !== id);".to_string());
    lines.push("  if (editingId === id) {".to_string());
    lines.push("    resetForm();".to_string());
    lines.push("  }".to_string());
    lines.push("  if (viewingId === id) {".to_string());
    lines.push("    viewingId = null;".to_string());
    lines.push("  }".to_string());
    lines.push("  renderDetail();".to_string());
    lines.push("  renderRows();".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("document.getElementById('record-form').addEventListener('submit', (event) => {".to_string());
    lines.push("  event.preventDefault();".to_string());
    lines.push("  const values = readForm();".to_string());
    lines.push("  const problem = validate(values);".to_string());
    lines.push("  if (problem) {".to_string());
    lines.push("    showError(problem);".to_string());
    lines.push("    return;".to_string());
    lines.push("  }".to_string());
    lines.push("  if (editingId === null) {".to_string());
    lines.push("    items.push({ id: Date.now(), values });".to_string());
    lines.push("  } else {".to_string());
    lines.push("    items = items.map((item) => (item.id === editingId ? { id: item.id, values } : item));".to_string());
    lines.push("  }".to_string());
    lines.push("  resetForm();".to_string());
    lines.push("  renderDetail();".to_string());
    lines.push("  renderRows();".to_string());
    lines.push("});".to_string());
    lines.push(String::new());
    lines.push(
        "document.getElementById('search').addEventListener('input', renderRows);".to_string(),
    );
    lines.push("renderRows();".to_string());

    indent_script(lines)
}

fn login_script(spec: &ScreenSpec) -> Vec<String> {
    let mut lines = fields_literal(&spec.fields);
    lines.push(String::new());
    lines.extend(validation_literal(spec));
    lines.push(String::new());
    lines.extend(form_io_script());
    lines.push(String::new());
    lines.push("document.getElementById('record-form').addEventListener('submit', (event) => {".to_string());
    lines.push("  event.preventDefault();".to_string());
    lines.push("  const values = readForm();".to_string());
    lines.push("  const problem = validate(values);".to_string());
    lines.push("  if (problem) {".to_string());
    lines.push("    showError(problem);".to_string());
    lines.push("    return;".to_string());
    lines.push("  }".to_string());
    lines.push("  showError(null);".to_string());
    lines.push("  window.alert('Dados enviados: ' + JSON.stringify(values));".to_string());
    lines.push("  writeForm({});".to_string());
    lines.push("});".to_string());

    indent_script(lines)
}

fn indent_script(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("      {line}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use norte_interpreter::build_spec_from_prompt;

    #[test]
    fn emits_single_page_plus_readme() {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::Bootstrap);
        let project = BootstrapEmitter::new().emit(&spec).unwrap();
        assert_eq!(project.len(), 2);
        assert!(project.file("index.html").is_some());
        assert!(project.file("README.md").is_some());
    }

    #[test]
    fn page_inlines_theme_and_cdn() {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::Bootstrap);
        let page = page(&spec);
        assert!(page.contains(BOOTSTRAP_CSS_CDN));
        assert!(page.contains("<style>"));
        assert!(page.contains("--primary: #0f766e"));
        assert!(page.contains("'Nome 1'"));
        assert!(page.contains("'SKU 2'"));
        assert!(page.contains("<th>Ações</th>"));
    }

    #[test]
    fn login_page_has_no_table() {
        let spec = build_spec_from_prompt("acesso ao painel", Stack::Bootstrap);
        let page = page(&spec);
        assert!(!page.contains("<table"));
        assert!(page.contains("window.alert"));
        assert!(page.contains("type=\"password\""));
        assert!(page.contains("Entrar"));
    }

    #[test]
    fn minimal_theme_is_inlined() {
        let mut spec = build_spec_from_prompt("CRUD de produtos", Stack::Bootstrap);
        spec.theme = norte_core::Theme::Minimal;
        assert!(page(&spec).contains("--primary: #111827"));
    }
}
