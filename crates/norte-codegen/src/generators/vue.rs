//! Vue 3 project emitter (Vite toolchain, composition API).

use super::{project_slug, readme, Emitter, GeneratedProject};
use crate::directive::{column_bindings, compile_rules, seed_rows, widget_for, WidgetDirective};
use crate::error::Result;
use crate::templates::{html_escape, js_string, TemplateEngine};
use crate::theme::stylesheet;
use norte_core::{Field, ScreenSpec, ScreenType, Stack};
use serde_json::json;

const PACKAGE_JSON: &str = r#"{
  "name": "{{name}}",
  "private": true,
  "version": "0.1.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "vue": "^3.4.29"
  },
  "devDependencies": {
    "@vitejs/plugin-vue": "^5.0.5",
    "vite": "^5.3.1"
  }
}
"#;

const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite';
import vue from '@vitejs/plugin-vue';

export default defineConfig({
  plugins: [vue()],
});
"#;

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="pt-BR">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{title}}</title>
  </head>
  <body>
    <div id="app"></div>
    <script type="module" src="/src/main.js"></script>
  </body>
</html>
"#;

const MAIN_JS: &str = r#"import { createApp } from 'vue';
import App from './App.vue';
import './style.css';

createApp(App).mount('#app');
"#;

/// Vue 3 project emitter (JavaScript, Vite).
pub struct VueEmitter;

impl VueEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VueEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for VueEmitter {
    fn stack(&self) -> Stack {
        Stack::Vue
    }

    fn emit(&self, spec: &ScreenSpec) -> Result<GeneratedProject> {
        let engine = TemplateEngine::new();
        let slug = project_slug(spec);
        let mut project = GeneratedProject::new();

        project.insert(
            "package.json",
            engine.render_string(PACKAGE_JSON, &json!({ "name": format!("{slug}-vue") }))?,
        );
        project.insert("vite.config.js", VITE_CONFIG);
        project.insert(
            "index.html",
            engine.render_string(INDEX_HTML, &json!({ "title": spec.title }))?,
        );
        project.insert("src/main.js", MAIN_JS);
        project.insert("src/App.vue", app_component(spec));
        project.insert("src/style.css", stylesheet(spec.theme));
        project.insert(
            "README.md",
            readme(
                spec,
                "Vue 3 + Vite",
                &["`npm install`", "`npm run dev`", "abra http://localhost:5173"],
            ),
        );
        Ok(project)
    }
}

fn app_component(spec: &ScreenSpec) -> String {
    match spec.screen_type {
        ScreenType::Login => login_component(spec),
        _ => crud_component(spec),
    }
}

/// `<script setup>` lines shared by both screen kinds: rules, the validator
/// and the empty form model.
fn script_prelude(spec: &ScreenSpec) -> Vec<String> {
    let mut lines = vec!["const RULES = [".to_string()];
    for rule in compile_rules(&spec.fields) {
        let record = serde_json::to_string(&rule).unwrap_or_default();
        lines.push(format!("  {record},"));
    }
    lines.push("];".to_string());
    lines.push(String::new());
    lines.push("const EMPTY_VALUES = {".to_string());
    for field in &spec.fields {
        lines.push(format!("  {}: '',", js_string(&field.id)));
    }
    lines.push("};".to_string());
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

fn crud_component(spec: &ScreenSpec) -> String {
    let mut lines = vec![
        "<script setup>".to_string(),
        "import { computed, ref } from 'vue';".to_string(),
        String::new(),
    ];
    lines.extend(script_prelude(spec));
    lines.push(String::new());
    lines.push("const SEED_ITEMS = [".to_string());
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
    lines.push(String::new());
    lines.push("const items = ref(SEED_ITEMS);".to_string());
    lines.push("const values = ref({ ...EMPTY_VALUES });".to_string());
    lines.push("const editingId = ref(null);".to_string());
    lines.push("const viewingId = ref(null);".to_string());
    lines.push("const query = ref('');".to_string());
    lines.push("const error = ref(null);".to_string());
    lines.push(String::new());
    lines.push("const visibleItems = computed(() => {".to_string());
    lines.push("  const needle = query.value.toLowerCase();".to_string());
    lines.push("  return items.value.filter((item) =>".to_string());
    lines.push(
        "    Object.values(item.values).some((value) => value.toLowerCase().includes(needle)),"
            .to_string(),
    );
    lines.push("  );".to_string());
    lines.push("});".to_string());
    lines.push(String::new());
    lines.push("const viewingItem = computed(".to_string());
    lines.push(
        "  () => items.value.find((item) => item.id === viewingId.value) ?? null,".to_string(),
    );
    lines.push(");".to_string());
    lines.push(String::new());
    lines.push("function resetForm() {".to_string());
    lines.push("  editingId.value = null;".to_string());
    lines.push("  values.value = { ...EMPTY_VALUES };".to_string());
    lines.push("  error.value = null;".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("function handleSubmit() {".to_string());
    lines.push("  const problem = validate(values.value);".to_string());
    lines.push("  if (problem) {".to_string());
    lines.push("    error.value = problem;".to_string());
    lines.push("    return;".to_string());
    lines.push("  }".to_string());
    lines.push("  if (editingId.value === null) {".to_string());
    lines.push(
        "    items.value = [...items.value, { id: Date.now(), values: { ...values.value } }];"
            .to_string(),
    );
    lines.push("  } else {".to_string());
    lines.push("    items.value = items.value.map((item) =>".to_string());
    lines.push(
        "      item.id === editingId.value ? { id: item.id, values: { ...values.value } } : item,"
            .to_string(),
    );
    lines.push("    );".to_string());
    lines.push("  }".to_string());
    lines.push("  resetForm();".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("function startEdit(item) {".to_string());
    lines.push("  editingId.value = item.id;".to_string());
    lines.push("  values.value = { ...item.values };".to_string());
    lines.push("  error.value = null;".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("function removeItem(id) {".to_string());
    lines.push("  items.value = items.value.filter((item) => item.id !== id);".to_string());
    lines.push("  if (editingId.value === id) {".to_string());
    lines.push("    resetForm();".to_string());
    lines.push("  }".to_string());
    lines.push("  if (viewingId.value === id) {".to_string());
    lines.push("    viewingId.value = null;".to_string());
    lines.push("  }".to_string());
    lines.push("}".to_string());
    lines.push("</script>".to_string());
    lines.push(String::new());

    lines.push("<template>".to_string());
    lines.push("  <div class=\"app-shell\">".to_string());
    lines.push("    <header>".to_string());
    lines.push(format!(
        "      <p class=\"eyebrow\">{}</p>",
        html_escape(&spec.entity)
    ));
    lines.push(format!(
        "      <h1 class=\"page-title\">{}</h1>",
        html_escape(&spec.title)
    ));
    lines.push(format!(
        "      <p class=\"page-subtitle\">{}</p>",
        html_escape(&spec.subtitle)
    ));
    lines.push("    </header>".to_string());
    lines.push(String::new());

    lines.push("    <section class=\"card\">".to_string());
    lines.push(format!(
        "      <h2 class=\"card-title\">Lista de {}</h2>",
        html_escape(&spec.entity)
    ));
    lines.push("      <div class=\"toolbar\">".to_string());
    lines.push(
        "        <input v-model=\"query\" class=\"input\" type=\"text\" placeholder=\"Buscar...\" />"
            .to_string(),
    );
    lines.push("      </div>".to_string());
    lines.push("      <table class=\"data-table\">".to_string());
    lines.push("        <thead>".to_string());
    lines.push("          <tr>".to_string());
    for column in &spec.list_columns {
        lines.push(format!("            <th>{}</th>", html_escape(column)));
    }
    lines.push("            <th>Ações</th>".to_string());
    lines.push("          </tr>".to_string());
    lines.push("        </thead>".to_string());
    lines.push("        <tbody>".to_string());
    lines.push("          <tr v-for=\"item in visibleItems\" :key=\"item.id\">".to_string());
    for (_, field_id) in column_bindings(spec) {
        match field_id {
            Some(id) => lines.push(format!(
                "            <td>{{{{ item.values[{}] }}}}</td>",
                js_string(&id)
            )),
            None => lines.push("            <td>—</td>".to_string()),
        }
    }
    lines.push("            <td>".to_string());
    lines.push("              <div class=\"actions\">".to_string());
    lines.push(
        "                <button type=\"button\" class=\"btn\" @click=\"viewingId = item.id\">Ver</button>"
            .to_string(),
    );
    lines.push(
        "                <button type=\"button\" class=\"btn\" @click=\"startEdit(item)\">Editar</button>"
            .to_string(),
    );
    lines.push(
        "                <button type=\"button\" class=\"btn btn-danger\" @click=\"removeItem(item.id)\">Excluir</button>"
            .to_string(),
    );
    lines.push("              </div>".to_string());
    lines.push("            </td>".to_string());
    lines.push("          </tr>".to_string());
    lines.push("          <tr v-if=\"visibleItems.length === 0\">".to_string());
    lines.push(format!(
        "            <td class=\"empty-row\" :colspan=\"{}\">Nenhum registro encontrado</td>",
        spec.list_columns.len() + 1
    ));
    lines.push("          </tr>".to_string());
    lines.push("        </tbody>".to_string());
    lines.push("      </table>".to_string());
    lines.push("    </section>".to_string());
    lines.push(String::new());

    lines.push("    <section v-if=\"viewingItem\" class=\"card\">".to_string());
    lines.push("      <h2 class=\"card-title\">Detalhes</h2>".to_string());
    lines.push("      <dl class=\"detail-list\">".to_string());
    for field in &spec.fields {
        lines.push(format!("        <dt>{}</dt>", html_escape(&field.label)));
        lines.push(format!(
            "        <dd>{{{{ viewingItem.values[{}] || '—' }}}}</dd>",
            js_string(&field.id)
        ));
    }
    lines.push("      </dl>".to_string());
    lines.push(
        "      <button type=\"button\" class=\"btn\" @click=\"viewingId = null\">Fechar</button>"
            .to_string(),
    );
    lines.push("    </section>".to_string());
    lines.push(String::new());

    lines.push("    <section class=\"card\">".to_string());
    lines.push(
        "      <h2 class=\"card-title\">{{ editingId === null ? 'Novo registro' : 'Editar registro' }}</h2>"
            .to_string(),
    );
    lines.push("      <p v-if=\"error\" class=\"form-error\">{{ error }}</p>".to_string());
    lines.push("      <form @submit.prevent=\"handleSubmit\">".to_string());
    for field in &spec.fields {
        lines.extend(field_markup(field, 8));
    }
    lines.push("        <div class=\"actions\">".to_string());
    lines.push("          <button type=\"submit\" class=\"btn btn-primary\">Salvar</button>".to_string());
    lines.push(
        "          <button type=\"button\" class=\"btn\" @click=\"resetForm\">Limpar</button>"
            .to_string(),
    );
    lines.push("        </div>".to_string());
    lines.push("      </form>".to_string());
    lines.push("    </section>".to_string());
    lines.push("  </div>".to_string());
    lines.push("</template>".to_string());

    lines.join("\n") + "\n"
}

fn login_component(spec: &ScreenSpec) -> String {
    let mut lines = vec![
        "<script setup>".to_string(),
        "import { ref } from 'vue';".to_string(),
        String::new(),
    ];
    lines.extend(script_prelude(spec));
    lines.push(String::new());
    lines.push("const values = ref({ ...EMPTY_VALUES });".to_string());
    lines.push("const error = ref(null);".to_string());
    lines.push(String::new());
    lines.push("function handleSubmit() {".to_string());
    lines.push("  const problem = validate(values.value);".to_string());
    lines.push("  if (problem) {".to_string());
    lines.push("    error.value = problem;".to_string());
    lines.push("    return;".to_string());
    lines.push("  }".to_string());
    lines.push("  error.value = null;".to_string());
    lines.push("  window.alert('Dados enviados: ' + JSON.stringify(values.value));".to_string());
    lines.push("  values.value = { ...EMPTY_VALUES };".to_string());
    lines.push("}".to_string());
    lines.push("</script>".to_string());
    lines.push(String::new());

    lines.push("<template>".to_string());
    lines.push("  <div class=\"app-shell\">".to_string());
    lines.push("    <section class=\"card login-card\">".to_string());
    lines.push(format!(
        "      <p class=\"eyebrow\">{}</p>",
        html_escape(&spec.entity)
    ));
    lines.push(format!(
        "      <h1 class=\"page-title\">{}</h1>",
        html_escape(&spec.title)
    ));
    lines.push(format!(
        "      <p class=\"page-subtitle\">{}</p>",
        html_escape(&spec.subtitle)
    ));
    lines.push("      <p v-if=\"error\" class=\"form-error\">{{ error }}</p>".to_string());
    lines.push("      <form @submit.prevent=\"handleSubmit\">".to_string());
    for field in &spec.fields {
        lines.extend(field_markup(field, 8));
    }
    lines.push("        <button type=\"submit\" class=\"btn btn-primary\">Entrar</button>".to_string());
    lines.push("      </form>".to_string());
    lines.push("    </section>".to_string());
    lines.push("  </div>".to_string());
    lines.push("</template>".to_string());
    lines.push(String::new());
    lines.push("<style scoped>".to_string());
    lines.push(".login-card {".to_string());
    lines.push("  max-width: 420px;".to_string());
    lines.push("  margin: 48px auto 0;".to_string());
    lines.push("}".to_string());
    lines.push("</style>".to_string());

    lines.join("\n") + "\n"
}

/// Template markup for one form control, bound to the shared form model via
/// `v-model`.
fn field_markup(field: &Field, indent: usize) -> Vec<String> {
    let p = " ".repeat(indent);
    let id = js_string(&field.id);
    let label = html_escape(&field.label);
    let mut lines = Vec::new();

    match widget_for(field) {
        WidgetDirective::Text { input_type } => {
            lines.push(format!("{p}<label class=\"field\">"));
            lines.push(format!("{p}  <span class=\"field-label\">{label}</span>"));
            let placeholder = field
                .placeholder
                .as_deref()
                .map(|text| format!(" placeholder=\"{}\"", html_escape(text)))
                .unwrap_or_default();
            lines.push(format!(
                "{p}  <input v-model=\"values[{id}]\" class=\"input\" type=\"{input_type}\"{placeholder} />"
            ));
            lines.push(format!("{p}</label>"));
        }
        WidgetDirective::Select { options } => {
            lines.push(format!("{p}<label class=\"field\">"));
            lines.push(format!("{p}  <span class=\"field-label\">{label}</span>"));
            lines.push(format!("{p}  <select v-model=\"values[{id}]\" class=\"input\">"));
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
                    "{p}      <input v-model=\"values[{id}]\" type=\"radio\" value=\"{escaped}\" />"
                ));
                lines.push(format!("{p}      {escaped}"));
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
                "{p}  <input v-model=\"values[{id}]\" type=\"checkbox\"{class} true-value=\"on\" false-value=\"\" />"
            ));
            lines.push(format!("{p}  <span class=\"field-label\">{label}</span>"));
            lines.push(format!("{p}</label>"));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use norte_interpreter::build_spec_from_prompt;

    #[test]
    fn emits_expected_tree() {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::Vue);
        let project = VueEmitter::new().emit(&spec).unwrap();
        for path in [
            "package.json",
            "vite.config.js",
            "index.html",
            "src/main.js",
            "src/App.vue",
            "src/style.css",
            "README.md",
        ] {
            assert!(project.file(path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn component_binds_fields_and_seed_rows() {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::Vue);
        let app = crud_component(&spec);
        assert!(app.contains("<script setup>"));
        assert!(app.contains("v-model=\"values['nome']\""));
        assert!(app.contains("'Nome 1'"));
        assert!(app.contains("'SKU 2'"));
        assert!(app.contains("<th>Ações</th>"));
        assert!(app.contains("Date.now()"));
    }

    #[test]
    fn login_component_has_no_table() {
        let spec = build_spec_from_prompt("login para o sistema", Stack::Vue);
        let project = VueEmitter::new().emit(&spec).unwrap();
        let app = project.file("src/App.vue").unwrap();
        assert!(!app.contains("<table"));
        assert!(app.contains("window.alert"));
        assert!(app.contains("type=\"password\""));
    }

    #[test]
    fn stylesheet_matches_selected_theme() {
        let mut spec = build_spec_from_prompt("CRUD de produtos", Stack::Vue);
        spec.theme = norte_core::Theme::Minimal;
        let project = VueEmitter::new().emit(&spec).unwrap();
        assert!(project
            .file("src/style.css")
            .unwrap()
            .contains("--primary: #111827"));
    }
}
