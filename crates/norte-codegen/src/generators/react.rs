//! React/TypeScript project emitter (Vite toolchain, hooks pattern).

use super::{project_slug, readme, Emitter, GeneratedProject};
use crate::directive::{column_bindings, compile_rules, seed_rows, widget_for, WidgetDirective};
use crate::error::Result;
use crate::templates::{html_escape, js_string, pascal, TemplateEngine};
use crate::theme::stylesheet;
use norte_core::{Field, FieldType, ScreenSpec, ScreenType, Stack};
use serde_json::json;

const PACKAGE_JSON: &str = r#"{
  "name": "{{name}}",
  "private": true,
  "version": "0.1.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "tsc && vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "react": "^18.3.1",
    "react-dom": "^18.3.1"
  },
  "devDependencies": {
    "@types/react": "^18.3.3",
    "@types/react-dom": "^18.3.0",
    "@vitejs/plugin-react": "^4.3.1",
    "typescript": "^5.4.5",
    "vite": "^5.3.1"
  }
}
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "useDefineForClassFields": true,
    "lib": ["ES2020", "DOM", "DOM.Iterable"],
    "module": "ESNext",
    "skipLibCheck": true,
    "moduleResolution": "bundler",
    "allowImportingTsExtensions": true,
    "resolveJsonModule": true,
    "isolatedModules": true,
    "noEmit": true,
    "jsx": "react-jsx",
    "strict": true,
    "noUnusedLocals": true,
    "noUnusedParameters": true,
    "noFallthroughCasesInSwitch": true
  },
  "include": ["src"],
  "references": [{ "path": "./tsconfig.node.json" }]
}
"#;

const TSCONFIG_NODE: &str = r#"{
  "compilerOptions": {
    "composite": true,
    "skipLibCheck": true,
    "module": "ESNext",
    "moduleResolution": "bundler",
    "allowSyntheticDefaultImports": true
  },
  "include": ["vite.config.ts"]
}
"#;

const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
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
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#;

const MAIN_TSX: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App';
import './index.css';

ReactDOM.createRoot(document.getElementById('root')!).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
);
"#;

const APP_CSS: &str = r#".login-card {
  max-width: 420px;
  margin: 48px auto 0;
}

.table-wrap {
  overflow-x: auto;
}
"#;

const API_MODULE: &str = r#"import type { {{type_name}} } from '../types/{{slug}}';

const BASE_URL = import.meta.env.VITE_API_URL ?? '/api';
const RESOURCE = BASE_URL + '/{{slug}}';

async function parse<T>(response: Response): Promise<T> {
  if (!response.ok) {
    throw new Error('Falha na requisição: ' + response.status);
  }
  return response.json() as Promise<T>;
}

export async function list(): Promise<{{type_name}}[]> {
  return parse(await fetch(RESOURCE));
}

export async function create(data: Omit<{{type_name}}, 'id'>): Promise<{{type_name}}> {
  return parse(
    await fetch(RESOURCE, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(data),
    }),
  );
}

export async function update(id: number, data: Omit<{{type_name}}, 'id'>): Promise<{{type_name}}> {
  return parse(
    await fetch(RESOURCE + '/' + id, {
      method: 'PUT',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(data),
    }),
  );
}

export async function remove(id: number): Promise<void> {
  const response = await fetch(RESOURCE + '/' + id, { method: 'DELETE' });
  if (!response.ok) {
    throw new Error('Falha na requisição: ' + response.status);
  }
}
"#;

/// React project emitter (TypeScript, Vite).
pub struct ReactEmitter {
    backend_ready: bool,
}

impl ReactEmitter {
    pub fn new() -> Self {
        Self {
            backend_ready: false,
        }
    }

    /// Also emit an HTTP client module and an entity type declaration, for
    /// projects that will be wired to a backend later.
    pub fn backend_ready() -> Self {
        Self { backend_ready: true }
    }
}

impl Default for ReactEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for ReactEmitter {
    fn stack(&self) -> Stack {
        Stack::React
    }

    fn emit(&self, spec: &ScreenSpec) -> Result<GeneratedProject> {
        let engine = TemplateEngine::new();
        let slug = project_slug(spec);
        let mut project = GeneratedProject::new();

        project.insert(
            "package.json",
            engine.render_string(PACKAGE_JSON, &json!({ "name": format!("{slug}-react") }))?,
        );
        project.insert("tsconfig.json", TSCONFIG);
        project.insert("tsconfig.node.json", TSCONFIG_NODE);
        project.insert("vite.config.ts", VITE_CONFIG);
        project.insert(
            "index.html",
            engine.render_string(INDEX_HTML, &json!({ "title": spec.title }))?,
        );
        project.insert("src/main.tsx", MAIN_TSX);
        project.insert("src/App.tsx", app_component(spec));
        project.insert("src/App.css", APP_CSS);
        project.insert("src/index.css", stylesheet(spec.theme));

        if self.backend_ready && spec.screen_type != ScreenType::Login {
            let type_name = pascal(&spec.entity);
            project.insert(format!("src/types/{slug}.ts"), types_module(spec, &type_name));
            project.insert(
                "src/lib/api.ts",
                engine.render_string(
                    API_MODULE,
                    &json!({ "type_name": type_name, "slug": slug }),
                )?,
            );
        }

        project.insert(
            "README.md",
            readme(
                spec,
                "React + Vite",
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

/// Preamble shared by both screen kinds: the Rule shape, the compiled rules
/// and the first-violation-wins validator.
fn validation_block(spec: &ScreenSpec) -> Vec<String> {
    let mut lines = vec![
        "interface Rule {".to_string(),
        "  id: string;".to_string(),
        "  label: string;".to_string(),
        "  required?: boolean;".to_string(),
        "  minLength?: number;".to_string(),
        "  maxLength?: number;".to_string(),
        "  pattern?: string;".to_string(),
        "  patternMessage?: string;".to_string(),
        "}".to_string(),
        String::new(),
        "const RULES: Rule[] = [".to_string(),
    ];
    for rule in compile_rules(&spec.fields) {
        // serde keeps the camelCase keys and omits unset constraints.
        let record = serde_json::to_string(&rule).unwrap_or_default();
        lines.push(format!("  {record},"));
    }
    lines.push("];".to_string());
    lines.push(String::new());
    lines.push("function validate(values: Record<string, string>): string | null {".to_string());
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

fn empty_values_block(fields: &[Field]) -> Vec<String> {
    let mut lines = vec!["const EMPTY_VALUES: Record<string, string> = {".to_string()];
    for field in fields {
        lines.push(format!("  {}: '',", js_string(&field.id)));
    }
    lines.push("};".to_string());
    lines
}

fn seed_items_block(fields: &[Field]) -> Vec<String> {
    let mut lines = vec!["const SEED_ITEMS: Item[] = [".to_string()];
    for row in seed_rows(fields) {
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
    lines
}

fn crud_component(spec: &ScreenSpec) -> String {
    let mut lines = vec![
        "import { FormEvent, useMemo, useState } from 'react';".to_string(),
        "import './App.css';".to_string(),
        String::new(),
        "interface Item {".to_string(),
        "  id: number;".to_string(),
        "  values: Record<string, string>;".to_string(),
        "}".to_string(),
        String::new(),
    ];
    lines.extend(validation_block(spec));
    lines.push(String::new());
    lines.extend(empty_values_block(&spec.fields));
    lines.push(String::new());
    lines.extend(seed_items_block(&spec.fields));
    lines.push(String::new());

    lines.push("export default function App() {".to_string());
    lines.push("  const [items, setItems] = useState<Item[]>(SEED_ITEMS);".to_string());
    lines.push(
        "  const [values, setValues] = useState<Record<string, string>>({ ...EMPTY_VALUES });"
            .to_string(),
    );
    lines.push("  const [editingId, setEditingId] = useState<number | null>(null);".to_string());
    lines.push("  const [viewingId, setViewingId] = useState<number | null>(null);".to_string());
    lines.push("  const [query, setQuery] = useState('');".to_string());
    lines.push("  const [error, setError] = useState<string | null>(null);".to_string());
    lines.push(String::new());
    lines.push("  const visibleItems = useMemo(() => {".to_string());
    lines.push("    const needle = query.toLowerCase();".to_string());
    lines.push("    return items.filter((item) =>".to_string());
    lines.push(
        "      Object.values(item.values).some((value) => value.toLowerCase().includes(needle)),"
            .to_string(),
    );
    lines.push("    );".to_string());
    lines.push("  }, [items, query]);".to_string());
    lines.push(String::new());
    lines.push(
        "  const viewingItem = items.find((item) => item.id === viewingId) ?? null;".to_string(),
    );
    lines.push(String::new());
    lines.push("  const setValue = (id: string, value: string) => {".to_string());
    lines.push("    setValues((previous) => ({ ...previous, [id]: value }));".to_string());
    lines.push("  };".to_string());
    lines.push(String::new());
    lines.push("  const resetForm = () => {".to_string());
    lines.push("    setEditingId(null);".to_string());
    lines.push("    setValues({ ...EMPTY_VALUES });".to_string());
    lines.push("    setError(null);".to_string());
    lines.push("  };".to_string());
    lines.push(String::new());
    lines.push("  const handleSubmit = (event: FormEvent) => {".to_string());
    lines.push("    event.preventDefault();".to_string());
    lines.push("    const problem = validate(values);".to_string());
    lines.push("    if (problem) {".to_string());
    lines.push("      setError(problem);".to_string());
    lines.push("      return;".to_string());
    lines.push("    }".to_string());
    lines.push("    if (editingId === null) {".to_string());
    lines.push(
        "      setItems((previous) => [...previous, { id: Date.now(), values: { ...values } }]);"
            .to_string(),
    );
    lines.push("    } else {".to_string());
    lines.push("      setItems((previous) =>".to_string());
    lines.push("        previous.map((item) =>".to_string());
    lines.push(
        "          item.id === editingId ? { id: item.id, values: { ...values } } : item,"
            .to_string(),
    );
    lines.push("        ),".to_string());
    lines.push("      );".to_string());
    lines.push("    }".to_string());
    lines.push("    resetForm();".to_string());
    lines.push("  };".to_string());
    lines.push(String::new());
    lines.push("  const startEdit = (item: Item) => {".to_string());
    lines.push("    setEditingId(item.id);".to_string());
    lines.push("    setValues({ ...item.values });".to_string());
    lines.push("    setError(null);".to_string());
    lines.push("  };".to_string());
    lines.push(String::new());
    lines.push("  const removeItem = (id: number) => {".to_string());
    lines.push("    setItems((previous) => previous.filter((item) => item.id !== id));".to_string());
    lines.push("    if (editingId === id) {".to_string());
    lines.push("      resetForm();".to_string());
    lines.push("    }".to_string());
    lines.push("    if (viewingId === id) {".to_string());
    lines.push("      setViewingId(null);".to_string());
    lines.push("    }".to_string());
    lines.push("  };".to_string());
    lines.push(String::new());

    lines.push("  return (".to_string());
    lines.push("    <div className=\"app-shell\">".to_string());
    lines.push("      <header>".to_string());
    lines.push(format!(
        "        <p className=\"eyebrow\">{}</p>",
        html_escape(&spec.entity)
    ));
    lines.push(format!(
        "        <h1 className=\"page-title\">{}</h1>",
        html_escape(&spec.title)
    ));
    lines.push(format!(
        "        <p className=\"page-subtitle\">{}</p>",
        html_escape(&spec.subtitle)
    ));
    lines.push("      </header>".to_string());
    lines.push(String::new());

    // List card
    lines.push("      <section className=\"card\">".to_string());
    lines.push(format!(
        "        <h2 className=\"card-title\">Lista de {}</h2>",
        html_escape(&spec.entity)
    ));
    lines.push("        <div className=\"toolbar\">".to_string());
    lines.push("          <input".to_string());
    lines.push("            className=\"input\"".to_string());
    lines.push("            type=\"text\"".to_string());
    lines.push("            placeholder=\"Buscar...\"".to_string());
    lines.push("            value={query}".to_string());
    lines.push("            onChange={(event) => setQuery(event.target.value)}".to_string());
    lines.push("          />".to_string());
    lines.push("        </div>".to_string());
    lines.push("        <div className=\"table-wrap\">".to_string());
    lines.push("          <table className=\"data-table\">".to_string());
    lines.push("            <thead>".to_string());
    lines.push("              <tr>".to_string());
    for column in &spec.list_columns {
        lines.push(format!("                <th>{}</th>", html_escape(column)));
    }
    lines.push("                <th>Ações</th>".to_string());
    lines.push("              </tr>".to_string());
    lines.push("            </thead>".to_string());
    lines.push("            <tbody>".to_string());
    lines.push("              {visibleItems.map((item) => (".to_string());
    lines.push("                <tr key={item.id}>".to_string());
    for (_, field_id) in column_bindings(spec) {
        match field_id {
            Some(id) => lines.push(format!(
                "                  <td>{{item.values[{}]}}</td>",
                js_string(&id)
            )),
            None => lines.push("                  <td>—</td>".to_string()),
        }
    }
    lines.push("                  <td>".to_string());
    lines.push("                    <div className=\"actions\">".to_string());
    lines.push("                      <button type=\"button\" className=\"btn\" onClick={() => setViewingId(item.id)}>".to_string());
    lines.push("                        Ver".to_string());
    lines.push("                      </button>".to_string());
    lines.push("                      <button type=\"button\" className=\"btn\" onClick={() => startEdit(item)}>".to_string());
    lines.push("                        Editar".to_string());
    lines.push("                      </button>".to_string());
    lines.push("                      <button type=\"button\" className=\"btn btn-danger\" onClick={() => removeItem(item.id)}>".to_string());
    lines.push("                        Excluir".to_string());
    lines.push("                      </button>".to_string());
    lines.push("                    </div>".to_string());
    lines.push("                  </td>".to_string());
    lines.push("                </tr>".to_string());
    lines.push("              ))}".to_string());
    lines.push("              {visibleItems.length === 0 && (".to_string());
    lines.push("                <tr>".to_string());
    lines.push(format!(
        "                  <td className=\"empty-row\" colSpan={{{}}}>",
        spec.list_columns.len() + 1
    ));
    lines.push("                    Nenhum registro encontrado".to_string());
    lines.push("                  </td>".to_string());
    lines.push("                </tr>".to_string());
    lines.push("              )}".to_string());
    lines.push("            </tbody>".to_string());
    lines.push("          </table>".to_string());
    lines.push("        </div>".to_string());
    lines.push("      </section>".to_string());
    lines.push(String::new());

    // Detail card
    lines.push("      {viewingItem && (".to_string());
    lines.push("        <section className=\"card\">".to_string());
    lines.push("          <h2 className=\"card-title\">Detalhes</h2>".to_string());
    lines.push("          <dl className=\"detail-list\">".to_string());
    for field in &spec.fields {
        lines.push(format!("            <dt>{}</dt>", html_escape(&field.label)));
        lines.push(format!(
            "            <dd>{{viewingItem.values[{}] || '—'}}</dd>",
            js_string(&field.id)
        ));
    }
    lines.push("          </dl>".to_string());
    lines.push(
        "          <button type=\"button\" className=\"btn\" onClick={() => setViewingId(null)}>"
            .to_string(),
    );
    lines.push("            Fechar".to_string());
    lines.push("          </button>".to_string());
    lines.push("        </section>".to_string());
    lines.push("      )}".to_string());
    lines.push(String::new());

    // Form card
    lines.push("      <section className=\"card\">".to_string());
    lines.push(
        "        <h2 className=\"card-title\">{editingId === null ? 'Novo registro' : 'Editar registro'}</h2>"
            .to_string(),
    );
    lines.push("        {error && <p className=\"form-error\">{error}</p>}".to_string());
    lines.push("        <form onSubmit={handleSubmit}>".to_string());
    for field in &spec.fields {
        lines.extend(field_jsx(field, 10));
    }
    lines.push("          <div className=\"actions\">".to_string());
    lines.push("            <button type=\"submit\" className=\"btn btn-primary\">".to_string());
    lines.push("              Salvar".to_string());
    lines.push("            </button>".to_string());
    lines.push(
        "            <button type=\"button\" className=\"btn\" onClick={resetForm}>".to_string(),
    );
    lines.push("              Limpar".to_string());
    lines.push("            </button>".to_string());
    lines.push("          </div>".to_string());
    lines.push("        </form>".to_string());
    lines.push("      </section>".to_string());
    lines.push("    </div>".to_string());
    lines.push("  );".to_string());
    lines.push("}".to_string());

    lines.join("\n") + "\n"
}

fn login_component(spec: &ScreenSpec) -> String {
    let mut lines = vec![
        "import { FormEvent, useState } from 'react';".to_string(),
        "import './App.css';".to_string(),
        String::new(),
    ];
    lines.extend(validation_block(spec));
    lines.push(String::new());
    lines.extend(empty_values_block(&spec.fields));
    lines.push(String::new());

    lines.push("export default function App() {".to_string());
    lines.push(
        "  const [values, setValues] = useState<Record<string, string>>({ ...EMPTY_VALUES });"
            .to_string(),
    );
    lines.push("  const [error, setError] = useState<string | null>(null);".to_string());
    lines.push(String::new());
    lines.push("  const setValue = (id: string, value: string) => {".to_string());
    lines.push("    setValues((previous) => ({ ...previous, [id]: value }));".to_string());
    lines.push("  };".to_string());
    lines.push(String::new());
    lines.push("  const handleSubmit = (event: FormEvent) => {".to_string());
    lines.push("    event.preventDefault();".to_string());
    lines.push("    const problem = validate(values);".to_string());
    lines.push("    if (problem) {".to_string());
    lines.push("      setError(problem);".to_string());
    lines.push("      return;".to_string());
    lines.push("    }".to_string());
    lines.push("    setError(null);".to_string());
    lines.push("    window.alert('Dados enviados: ' + JSON.stringify(values));".to_string());
    lines.push("    setValues({ ...EMPTY_VALUES });".to_string());
    lines.push("  };".to_string());
    lines.push(String::new());
    lines.push("  return (".to_string());
    lines.push("    <div className=\"app-shell\">".to_string());
    lines.push("      <section className=\"card login-card\">".to_string());
    lines.push(format!(
        "        <p className=\"eyebrow\">{}</p>",
        html_escape(&spec.entity)
    ));
    lines.push(format!(
        "        <h1 className=\"page-title\">{}</h1>",
        html_escape(&spec.title)
    ));
    lines.push(format!(
        "        <p className=\"page-subtitle\">{}</p>",
        html_escape(&spec.subtitle)
    ));
    lines.push("        {error && <p className=\"form-error\">{error}</p>}".to_string());
    lines.push("        <form onSubmit={handleSubmit}>".to_string());
    for field in &spec.fields {
        lines.extend(field_jsx(field, 10));
    }
    lines.push("          <button type=\"submit\" className=\"btn btn-primary\">".to_string());
    lines.push("            Entrar".to_string());
    lines.push("          </button>".to_string());
    lines.push("        </form>".to_string());
    lines.push("      </section>".to_string());
    lines.push("    </div>".to_string());
    lines.push("  );".to_string());
    lines.push("}".to_string());

    lines.join("\n") + "\n"
}

/// JSX for one form control, following the shared widget directive.
fn field_jsx(field: &Field, indent: usize) -> Vec<String> {
    let p = " ".repeat(indent);
    let id = js_string(&field.id);
    let label = html_escape(&field.label);
    let mut lines = Vec::new();

    match widget_for(field) {
        WidgetDirective::Text { input_type } => {
            lines.push(format!("{p}<label className=\"field\">"));
            lines.push(format!("{p}  <span className=\"field-label\">{label}</span>"));
            lines.push(format!("{p}  <input"));
            lines.push(format!("{p}    className=\"input\""));
            lines.push(format!("{p}    type=\"{input_type}\""));
            lines.push(format!("{p}    name=\"{}\"", html_escape(&field.id)));
            if let Some(placeholder) = &field.placeholder {
                lines.push(format!(
                    "{p}    placeholder=\"{}\"",
                    html_escape(placeholder)
                ));
            }
            lines.push(format!("{p}    value={{values[{id}]}}"));
            lines.push(format!(
                "{p}    onChange={{(event) => setValue({id}, event.target.value)}}"
            ));
            lines.push(format!("{p}  />"));
            lines.push(format!("{p}</label>"));
        }
        WidgetDirective::Select { options } => {
            lines.push(format!("{p}<label className=\"field\">"));
            lines.push(format!("{p}  <span className=\"field-label\">{label}</span>"));
            lines.push(format!("{p}  <select"));
            lines.push(format!("{p}    className=\"input\""));
            lines.push(format!("{p}    name=\"{}\"", html_escape(&field.id)));
            lines.push(format!("{p}    value={{values[{id}]}}"));
            lines.push(format!(
                "{p}    onChange={{(event) => setValue({id}, event.target.value)}}"
            ));
            lines.push(format!("{p}  >"));
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
            lines.push(format!("{p}<div className=\"field\">"));
            lines.push(format!("{p}  <span className=\"field-label\">{label}</span>"));
            lines.push(format!("{p}  <div className=\"radio-group\">"));
            for option in &options {
                let escaped = html_escape(option);
                let literal = js_string(option);
                lines.push(format!("{p}    <label>"));
                lines.push(format!("{p}      <input"));
                lines.push(format!("{p}        type=\"radio\""));
                lines.push(format!("{p}        name=\"{}\"", html_escape(&field.id)));
                lines.push(format!("{p}        value=\"{escaped}\""));
                lines.push(format!("{p}        checked={{values[{id}] === {literal}}}"));
                lines.push(format!(
                    "{p}        onChange={{(event) => setValue({id}, event.target.value)}}"
                ));
                lines.push(format!("{p}      />{{' '}}"));
                lines.push(format!("{p}      {escaped}"));
                lines.push(format!("{p}    </label>"));
            }
            lines.push(format!("{p}  </div>"));
            lines.push(format!("{p}</div>"));
        }
        WidgetDirective::Checkbox | WidgetDirective::Switch => {
            let input_class = if matches!(widget_for(field), WidgetDirective::Switch) {
                " className=\"switch-input\""
            } else {
                ""
            };
            lines.push(format!("{p}<label className=\"check-field\">"));
            lines.push(format!("{p}  <input"));
            lines.push(format!("{p}    type=\"checkbox\"{input_class}"));
            lines.push(format!("{p}    name=\"{}\"", html_escape(&field.id)));
            lines.push(format!("{p}    checked={{values[{id}] === 'on'}}"));
            lines.push(format!(
                "{p}    onChange={{(event) => setValue({id}, event.target.checked ? 'on' : '')}}"
            ));
            lines.push(format!("{p}  />"));
            lines.push(format!("{p}  <span className=\"field-label\">{label}</span>"));
            lines.push(format!("{p}</label>"));
        }
    }

    lines
}

fn types_module(spec: &ScreenSpec, type_name: &str) -> String {
    let mut lines = vec![
        format!("export interface {type_name} {{"),
        "  id: number;".to_string(),
    ];
    for field in &spec.fields {
        let ts_type = if field.field_type == FieldType::Number {
            "number"
        } else if field.field_type.is_boolean() {
            "boolean"
        } else {
            "string"
        };
        lines.push(format!("  {}: {};", field.id, ts_type));
    }
    lines.push("}".to_string());
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use norte_interpreter::build_spec_from_prompt;

    #[test]
    fn emits_expected_tree() {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::React);
        let project = ReactEmitter::new().emit(&spec).unwrap();
        for path in [
            "package.json",
            "tsconfig.json",
            "tsconfig.node.json",
            "vite.config.ts",
            "index.html",
            "src/main.tsx",
            "src/App.tsx",
            "src/App.css",
            "src/index.css",
            "README.md",
        ] {
            assert!(project.file(path).is_some(), "missing {path}");
        }
        assert!(project.file("src/lib/api.ts").is_none());
    }

    #[test]
    fn app_component_carries_seed_rows_and_labels() {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::React);
        let app = crud_component(&spec);
        assert!(app.contains("'Nome 1'"));
        assert!(app.contains("'SKU 2'"));
        assert!(app.contains("CRUD de Produtos"));
        assert!(app.contains("<th>Ações</th>"));
        assert!(app.contains("Object.values(item.values).some"));
        assert!(app.contains("Date.now()"));
    }

    #[test]
    fn login_component_has_no_table() {
        let spec = build_spec_from_prompt("tela de login", Stack::React);
        let project = ReactEmitter::new().emit(&spec).unwrap();
        let app = project.file("src/App.tsx").unwrap();
        assert!(!app.contains("<table"));
        assert!(app.contains("window.alert"));
        assert!(app.contains("type=\"password\""));
    }

    #[test]
    fn backend_ready_adds_api_layer() {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::React);
        let project = ReactEmitter::backend_ready().emit(&spec).unwrap();
        assert!(project.file("src/lib/api.ts").is_some());
        let types = project.file("src/types/produtos.ts").unwrap();
        assert!(types.contains("export interface Produtos"));
        assert!(types.contains("preco: number;"));
        assert!(types.contains("ativo: boolean;"));
    }

    #[test]
    fn drifted_column_renders_placeholder_cell() {
        let mut spec = build_spec_from_prompt("CRUD de produtos", Stack::React);
        norte_core::rename_column(&mut spec, 0, "Coluna Livre");
        let app = crud_component(&spec);
        assert!(app.contains("<td>—</td>"));
        assert!(app.contains("<th>Coluna Livre</th>"));
    }

    #[test]
    fn package_json_uses_entity_slug() {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::React);
        let project = ReactEmitter::new().emit(&spec).unwrap();
        assert!(project
            .file("package.json")
            .unwrap()
            .contains("\"name\": \"produtos-react\""));
    }
}
