//! Angular project emitter (standalone component, application builder).

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
  "scripts": {
    "ng": "ng",
    "start": "ng serve",
    "build": "ng build"
  },
  "dependencies": {
    "@angular/common": "^17.3.0",
    "@angular/compiler": "^17.3.0",
    "@angular/core": "^17.3.0",
    "@angular/forms": "^17.3.0",
    "@angular/platform-browser": "^17.3.0",
    "rxjs": "~7.8.0",
    "tslib": "^2.3.0",
    "zone.js": "~0.14.3"
  },
  "devDependencies": {
    "@angular-devkit/build-angular": "^17.3.0",
    "@angular/cli": "^17.3.0",
    "typescript": "~5.4.2"
  }
}
"#;

const ANGULAR_JSON: &str = r#"{
  "$schema": "./node_modules/@angular/cli/lib/config/schema.json",
  "version": 1,
  "newProjectRoot": "projects",
  "projects": {
    "{{name}}": {
      "projectType": "application",
      "root": "",
      "sourceRoot": "src",
      "prefix": "app",
      "architect": {
        "build": {
          "builder": "@angular-devkit/build-angular:application",
          "options": {
            "outputPath": "dist/{{name}}",
            "index": "src/index.html",
            "browser": "src/main.ts",
            "tsConfig": "tsconfig.app.json",
            "styles": ["src/styles.css"]
          }
        },
        "serve": {
          "builder": "@angular-devkit/build-angular:dev-server",
          "options": {
            "buildTarget": "{{name}}:build"
          }
        }
      }
    }
  }
}
"#;

const TSCONFIG: &str = r#"{
  "compileOnSave": false,
  "compilerOptions": {
    "outDir": "./dist/out-tsc",
    "strict": true,
    "noImplicitOverride": true,
    "noPropertyAccessFromIndexSignature": true,
    "noImplicitReturns": true,
    "noFallthroughCasesInSwitch": true,
    "esModuleInterop": true,
    "sourceMap": true,
    "declaration": false,
    "experimentalDecorators": true,
    "moduleResolution": "bundler",
    "importHelpers": true,
    "target": "ES2022",
    "module": "ES2022",
    "useDefineForClassFields": false,
    "lib": ["ES2022", "dom"]
  },
  "angularCompilerOptions": {
    "enableI18nLegacyMessageIdFormat": false,
    "strictInjectionParameters": true,
    "strictInputAccessModifiers": true,
    "strictTemplates": true
  }
}
"#;

const TSCONFIG_APP: &str = r#"{
  "extends": "./tsconfig.json",
  "compilerOptions": {
    "outDir": "./out-tsc/app",
    "types": []
  },
  "files": ["src/main.ts"],
  "include": ["src/**/*.d.ts"]
}
"#;

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="pt-BR">
  <head>
    <meta charset="utf-8" />
    <title>{{title}}</title>
    <base href="/" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
  </head>
  <body>
    <app-root></app-root>
  </body>
</html>
"#;

const MAIN_TS: &str = r#"import { bootstrapApplication } from '@angular/platform-browser';
import { appConfig } from './app/app.config';
import { AppComponent } from './app/app.component';

bootstrapApplication(AppComponent, appConfig).catch((err) => console.error(err));
"#;

const APP_CONFIG: &str = r#"import { ApplicationConfig } from '@angular/core';

export const appConfig: ApplicationConfig = {
  providers: [],
};
"#;

const APP_COMPONENT_CSS: &str = r#".login-card {
  max-width: 420px;
  margin: 48px auto 0;
}

.table-wrap {
  overflow-x: auto;
}
"#;

/// Angular project emitter (standalone component).
pub struct AngularEmitter;

impl AngularEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AngularEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for AngularEmitter {
    fn stack(&self) -> Stack {
        Stack::Angular
    }

    fn emit(&self, spec: &ScreenSpec) -> Result<GeneratedProject> {
        let engine = TemplateEngine::new();
        let slug = project_slug(spec);
        let name = format!("{slug}-angular");
        let mut project = GeneratedProject::new();

        project.insert(
            "package.json",
            engine.render_string(PACKAGE_JSON, &json!({ "name": name }))?,
        );
        project.insert(
            "angular.json",
            engine.render_string(ANGULAR_JSON, &json!({ "name": name }))?,
        );
        project.insert("tsconfig.json", TSCONFIG);
        project.insert("tsconfig.app.json", TSCONFIG_APP);
        project.insert(
            "src/index.html",
            engine.render_string(INDEX_HTML, &json!({ "title": spec.title }))?,
        );
        project.insert("src/main.ts", MAIN_TS);
        project.insert("src/styles.css", stylesheet(spec.theme));
        project.insert("src/app/app.config.ts", APP_CONFIG);
        project.insert("src/app/app.component.ts", component_class(spec));
        project.insert("src/app/app.component.html", component_template(spec));
        project.insert("src/app/app.component.css", APP_COMPONENT_CSS);
        project.insert(
            "README.md",
            readme(
                spec,
                "Angular",
                &["`npm install`", "`npm start`", "abra http://localhost:4200"],
            ),
        );
        Ok(project)
    }
}

fn rules_and_validator(spec: &ScreenSpec) -> Vec<String> {
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

fn empty_values_literal(fields: &[Field]) -> Vec<String> {
    let mut lines = vec!["const EMPTY_VALUES: Record<string, string> = {".to_string()];
    for field in fields {
        lines.push(format!("  {}: '',", js_string(&field.id)));
    }
    lines.push("};".to_string());
    lines
}

fn component_class(spec: &ScreenSpec) -> String {
    match spec.screen_type {
        ScreenType::Login => login_class(spec),
        _ => crud_class(spec),
    }
}

fn crud_class(spec: &ScreenSpec) -> String {
    let mut lines = vec![
        "import { Component } from '@angular/core';".to_string(),
        "import { CommonModule } from '@angular/common';".to_string(),
        "import { FormsModule } from '@angular/forms';".to_string(),
        String::new(),
        "interface Item {".to_string(),
        "  id: number;".to_string(),
        "  values: Record<string, string>;".to_string(),
        "}".to_string(),
        String::new(),
    ];
    lines.extend(rules_and_validator(spec));
    lines.push(String::new());
    lines.extend(empty_values_literal(&spec.fields));
    lines.push(String::new());
    lines.push("const SEED_ITEMS: Item[] = [".to_string());
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

    lines.push("@Component({".to_string());
    lines.push("  selector: 'app-root',".to_string());
    lines.push("  standalone: true,".to_string());
    lines.push("  imports: [CommonModule, FormsModule],".to_string());
    lines.push("  templateUrl: './app.component.html',".to_string());
    lines.push("  styleUrl: './app.component.css',".to_string());
    lines.push("})".to_string());
    lines.push("export class AppComponent {".to_string());
    lines.push("  items: Item[] = [...SEED_ITEMS];".to_string());
    lines.push("  values: Record<string, string> = { ...EMPTY_VALUES };".to_string());
    lines.push("  editingId: number | null = null;".to_string());
    lines.push("  viewingId: number | null = null;".to_string());
    lines.push("  query = '';".to_string());
    lines.push("  error: string | null = null;".to_string());
    lines.push(String::new());
    lines.push("  get visibleItems(): Item[] {".to_string());
    lines.push("    const needle = this.query.toLowerCase();".to_string());
    lines.push("    return this.items.filter((item) =>".to_string());
    lines.push(
        "      Object.values(item.values).some((value) => value.toLowerCase().includes(needle)),"
            .to_string(),
    );
    lines.push("    );".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());
    lines.push("  get viewingItem(): Item | null {".to_string());
    lines.push(
        "    return this.items.find((item) => item.id === this.viewingId) ?? null;".to_string(),
    );
    lines.push("  }".to_string());
    lines.push(String::new());
    lines.push("  setValue(id: string, value: string): void {".to_string());
    lines.push("    this.values = { ...this.values, [id]: value };".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());
    lines.push("  checked(event: Event): boolean {".to_string());
    lines.push("    return (event.target as HTMLInputElement).checked;".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());
    lines.push("  resetForm(): void {".to_string());
    lines.push("    this.editingId = null;".to_string());
    lines.push("    this.values = { ...EMPTY_VALUES };".to_string());
    lines.push("    this.error = null;".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());
    lines.push("  handleSubmit(): void {".to_string());
    lines.push("    const problem = validate(this.values);".to_string());
    lines.push("    if (problem) {".to_string());
    lines.push("      this.error = problem;".to_string());
    lines.push("      return;".to_string());
    lines.push("    }".to_string());
    lines.push("    if (this.editingId === null) {".to_string());
    lines.push(
        "      this.items = [...this.items, { id: Date.now(), values: { ...this.values } }];"
            .to_string(),
    );
    lines.push("    } else {".to_string());
    lines.push("      this.items = this.items.map((item) =>".to_string());
    lines.push(
        "        item.id === this.editingId ? { id: item.id, values: { ...this.values } } : item,"
            .to_string(),
    );
    lines.push("      );".to_string());
    lines.push("    }".to_string());
    lines.push("    this.resetForm();".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());
    lines.push("  startEdit(item: Item): void {".to_string());
    lines.push("    this.editingId = item.id;".to_string());
    lines.push("    this.values = { ...item.values };".to_string());
    lines.push("    this.error = null;".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());
    lines.push("  removeItem(id: number): void {".to_string());
    lines.push("    this.items = this.items.filter((item) => item.id !== id);".to_string());
    lines.push("    if (this.editingId === id) {".to_string());
    lines.push("      this.resetForm();".to_string());
    lines.push("    }".to_string());
    lines.push("    if (this.viewingId === id) {".to_string());
    lines.push("      this.viewingId = null;".to_string());
    lines.push("    }".to_string());
    lines.push("  }".to_string());
    lines.push("}".to_string());

    lines.join("\n") + "\n"
}

fn login_class(spec: &ScreenSpec) -> String {
    let mut lines = vec![
        "import { Component } from '@angular/core';".to_string(),
        "import { CommonModule } from '@angular/common';".to_string(),
        "import { FormsModule } from '@angular/forms';".to_string(),
        String::new(),
    ];
    lines.extend(rules_and_validator(spec));
    lines.push(String::new());
    lines.extend(empty_values_literal(&spec.fields));
    lines.push(String::new());
    lines.push("@Component({".to_string());
    lines.push("  selector: 'app-root',".to_string());
    lines.push("  standalone: true,".to_string());
    lines.push("  imports: [CommonModule, FormsModule],".to_string());
    lines.push("  templateUrl: './app.component.html',".to_string());
    lines.push("  styleUrl: './app.component.css',".to_string());
    lines.push("})".to_string());
    lines.push("export class AppComponent {".to_string());
    lines.push("  values: Record<string, string> = { ...EMPTY_VALUES };".to_string());
    lines.push("  error: string | null = null;".to_string());
    lines.push(String::new());
    lines.push("  setValue(id: string, value: string): void {".to_string());
    lines.push("    this.values = { ...this.values, [id]: value };".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());
    lines.push("  checked(event: Event): boolean {".to_string());
    lines.push("    return (event.target as HTMLInputElement).checked;".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());
    lines.push("  handleSubmit(): void {".to_string());
    lines.push("    const problem = validate(this.values);".to_string());
    lines.push("    if (problem) {".to_string());
    lines.push("      this.error = problem;".to_string());
    lines.push("      return;".to_string());
    lines.push("    }".to_string());
    lines.push("    this.error = null;".to_string());
    lines.push("    window.alert('Dados enviados: ' + JSON.stringify(this.values));".to_string());
    lines.push("    this.values = { ...EMPTY_VALUES };".to_string());
    lines.push("  }".to_string());
    lines.push("}".to_string());

    lines.join("\n") + "\n"
}

fn component_template(spec: &ScreenSpec) -> String {
    match spec.screen_type {
        ScreenType::Login => login_template(spec),
        _ => crud_template(spec),
    }
}

fn crud_template(spec: &ScreenSpec) -> String {
    let mut lines = vec![
        "<div class=\"app-shell\">".to_string(),
        "  <header>".to_string(),
        format!("    <p class=\"eyebrow\">{}</p>", html_escape(&spec.entity)),
        format!(
            "    <h1 class=\"page-title\">{}</h1>",
            html_escape(&spec.title)
        ),
        format!(
            "    <p class=\"page-subtitle\">{}</p>",
            html_escape(&spec.subtitle)
        ),
        "  </header>".to_string(),
        String::new(),
        "  <section class=\"card\">".to_string(),
        format!(
            "    <h2 class=\"card-title\">Lista de {}</h2>",
            html_escape(&spec.entity)
        ),
        "    <div class=\"toolbar\">".to_string(),
        "      <input class=\"input\" type=\"text\" placeholder=\"Buscar...\" name=\"query\" [(ngModel)]=\"query\" />".to_string(),
        "    </div>".to_string(),
        "    <div class=\"table-wrap\">".to_string(),
        "      <table class=\"data-table\">".to_string(),
        "        <thead>".to_string(),
        "          <tr>".to_string(),
    ];
    for column in &spec.list_columns {
        lines.push(format!("            <th>{}</th>", html_escape(column)));
    }
    lines.push("            <th>Ações</th>".to_string());
    lines.push("          </tr>".to_string());
    lines.push("        </thead>".to_string());
    lines.push("        <tbody>".to_string());
    lines.push("          @for (item of visibleItems; track item.id) {".to_string());
    lines.push("            <tr>".to_string());
    for (_, field_id) in column_bindings(spec) {
        match field_id {
            Some(id) => lines.push(format!(
                "              <td>{{{{ item.values[{}] }}}}</td>",
                js_string(&id)
            )),
            None => lines.push("              <td>—</td>".to_string()),
        }
    }
    lines.push("              <td>".to_string());
    lines.push("                <div class=\"actions\">".to_string());
    lines.push(
        "                  <button type=\"button\" class=\"btn\" (click)=\"viewingId = item.id\">Ver</button>"
            .to_string(),
    );
    lines.push(
        "                  <button type=\"button\" class=\"btn\" (click)=\"startEdit(item)\">Editar</button>"
            .to_string(),
    );
    lines.push(
        "                  <button type=\"button\" class=\"btn btn-danger\" (click)=\"removeItem(item.id)\">Excluir</button>"
            .to_string(),
    );
    lines.push("                </div>".to_string());
    lines.push("              </td>".to_string());
    lines.push("            </tr>".to_string());
    lines.push("          } @empty {".to_string());
    lines.push("            <tr>".to_string());
    lines.push(format!(
        "              <td class=\"empty-row\" colspan=\"{}\">Nenhum registro encontrado</td>",
        spec.list_columns.len() + 1
    ));
    lines.push("            </tr>".to_string());
    lines.push("          }".to_string());
    lines.push("        </tbody>".to_string());
    lines.push("      </table>".to_string());
    lines.push("    </div>".to_string());
    lines.push("  </section>".to_string());
    lines.push(String::new());

    lines.push("  @if (viewingItem; as item) {".to_string());
    lines.push("    <section class=\"card\">".to_string());
    lines.push("      <h2 class=\"card-title\">Detalhes</h2>".to_string());
    lines.push("      <dl class=\"detail-list\">".to_string());
    for field in &spec.fields {
        lines.push(format!("        <dt>{}</dt>", html_escape(&field.label)));
        lines.push(format!(
            "        <dd>{{{{ item.values[{}] || '—' }}}}</dd>",
            js_string(&field.id)
        ));
    }
    lines.push("      </dl>".to_string());
    lines.push(
        "      <button type=\"button\" class=\"btn\" (click)=\"viewingId = null\">Fechar</button>"
            .to_string(),
    );
    lines.push("    </section>".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());

    lines.push("  <section class=\"card\">".to_string());
    lines.push(
        "    <h2 class=\"card-title\">{{ editingId === null ? 'Novo registro' : 'Editar registro' }}</h2>"
            .to_string(),
    );
    lines.push("    @if (error) {".to_string());
    lines.push("      <p class=\"form-error\">{{ error }}</p>".to_string());
    lines.push("    }".to_string());
    lines.push("    <form (ngSubmit)=\"handleSubmit()\">".to_string());
    for field in &spec.fields {
        lines.extend(field_markup(field, 6));
    }
    lines.push("      <div class=\"actions\">".to_string());
    lines.push("        <button type=\"submit\" class=\"btn btn-primary\">Salvar</button>".to_string());
    lines.push(
        "        <button type=\"button\" class=\"btn\" (click)=\"resetForm()\">Limpar</button>"
            .to_string(),
    );
    lines.push("      </div>".to_string());
    lines.push("    </form>".to_string());
    lines.push("  </section>".to_string());
    lines.push("</div>".to_string());

    lines.join("\n") + "\n"
}

fn login_template(spec: &ScreenSpec) -> String {
    let mut lines = vec![
        "<div class=\"app-shell\">".to_string(),
        "  <section class=\"card login-card\">".to_string(),
        format!("    <p class=\"eyebrow\">{}</p>", html_escape(&spec.entity)),
        format!(
            "    <h1 class=\"page-title\">{}</h1>",
            html_escape(&spec.title)
        ),
        format!(
            "    <p class=\"page-subtitle\">{}</p>",
            html_escape(&spec.subtitle)
        ),
        "    @if (error) {".to_string(),
        "      <p class=\"form-error\">{{ error }}</p>".to_string(),
        "    }".to_string(),
        "    <form (ngSubmit)=\"handleSubmit()\">".to_string(),
    ];
    for field in &spec.fields {
        lines.extend(field_markup(field, 6));
    }
    lines.push("      <button type=\"submit\" class=\"btn btn-primary\">Entrar</button>".to_string());
    lines.push("    </form>".to_string());
    lines.push("  </section>".to_string());
    lines.push("</div>".to_string());

    lines.join("\n") + "\n"
}

/// Template markup for one form control. Text-like controls bind through
/// `ngModel`; boolean controls keep the shared 'on'/'' string convention via
/// explicit checked/change bindings.
fn field_markup(field: &Field, indent: usize) -> Vec<String> {
    let p = " ".repeat(indent);
    let id = js_string(&field.id);
    let name = html_escape(&field.id);
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
                "{p}  <input class=\"input\" type=\"{input_type}\" name=\"{name}\"{placeholder} [(ngModel)]=\"values[{id}]\" />"
            ));
            lines.push(format!("{p}</label>"));
        }
        WidgetDirective::Select { options } => {
            lines.push(format!("{p}<label class=\"field\">"));
            lines.push(format!("{p}  <span class=\"field-label\">{label}</span>"));
            lines.push(format!(
                "{p}  <select class=\"input\" name=\"{name}\" [(ngModel)]=\"values[{id}]\">"
            ));
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
                    "{p}      <input type=\"radio\" name=\"{name}\" value=\"{escaped}\" [(ngModel)]=\"values[{id}]\" />"
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
                "{p}  <input type=\"checkbox\"{class} name=\"{name}\" [checked]=\"values[{id}] === 'on'\" (change)=\"setValue({id}, checked($event) ? 'on' : '')\" />"
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
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::Angular);
        let project = AngularEmitter::new().emit(&spec).unwrap();
        for path in [
            "package.json",
            "angular.json",
            "tsconfig.json",
            "tsconfig.app.json",
            "src/index.html",
            "src/main.ts",
            "src/styles.css",
            "src/app/app.config.ts",
            "src/app/app.component.ts",
            "src/app/app.component.html",
            "src/app/app.component.css",
            "README.md",
        ] {
            assert!(project.file(path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn component_class_carries_seed_rows() {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::Angular);
        let class = crud_class(&spec);
        assert!(class.contains("export class AppComponent"));
        assert!(class.contains("'Nome 1'"));
        assert!(class.contains("'SKU 2'"));
        assert!(class.contains("Date.now()"));
        assert!(class.contains("standalone: true"));
    }

    #[test]
    fn template_binds_fields_and_columns() {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::Angular);
        let template = crud_template(&spec);
        assert!(template.contains("[(ngModel)]=\"values['nome']\""));
        assert!(template.contains("<th>Ações</th>"));
        assert!(template.contains("@for (item of visibleItems; track item.id)"));
        assert!(template.contains("Nenhum registro encontrado"));
    }

    #[test]
    fn login_variant_has_no_table() {
        let spec = build_spec_from_prompt("entrar no sistema", Stack::Angular);
        let project = AngularEmitter::new().emit(&spec).unwrap();
        let template = project.file("src/app/app.component.html").unwrap();
        assert!(!template.contains("<table"));
        assert!(template.contains("Entrar"));
        let class = project.file("src/app/app.component.ts").unwrap();
        assert!(class.contains("window.alert"));
    }

    #[test]
    fn angular_json_names_project_after_entity() {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::Angular);
        let project = AngularEmitter::new().emit(&spec).unwrap();
        assert!(project
            .file("angular.json")
            .unwrap()
            .contains("\"produtos-angular\""));
    }
}
