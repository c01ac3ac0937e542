//! Theme tokens and the shared stylesheet.
//!
//! Two named variants, `norte` and `minimal`, each a fixed set of CSS custom
//! properties. The class rules below are shared by all four emitters: the
//! framework stacks write [`stylesheet`] to a CSS file and the static
//! Bootstrap page inlines it in a `<style>` block, so the same spec produces
//! visually comparable screens everywhere.

use norte_core::Theme;

/// Color and shape tokens for one theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub primary_strong: &'static str,
    pub primary_contrast: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub danger: &'static str,
    pub radius: &'static str,
    pub font: &'static str,
}

/// Token set for a theme.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Norte => Palette {
            primary: "#0f766e",
            primary_strong: "#115e59",
            primary_contrast: "#ffffff",
            background: "#f0fdfa",
            surface: "#ffffff",
            border: "#ccdedd",
            text: "#134e4a",
            muted: "#5f7a77",
            danger: "#b91c1c",
            radius: "10px",
            font: "'Inter', 'Segoe UI', sans-serif",
        },
        Theme::Minimal => Palette {
            primary: "#111827",
            primary_strong: "#000000",
            primary_contrast: "#ffffff",
            background: "#fafafa",
            surface: "#ffffff",
            border: "#e5e7eb",
            text: "#111827",
            muted: "#6b7280",
            danger: "#991b1b",
            radius: "4px",
            font: "'Helvetica Neue', Arial, sans-serif",
        },
    }
}

/// Full stylesheet body for the selected theme.
pub fn stylesheet(theme: Theme) -> String {
    let p = palette(theme);
    format!(
        r#":root {{
  --primary: {primary};
  --primary-strong: {primary_strong};
  --primary-contrast: {primary_contrast};
  --background: {background};
  --surface: {surface};
  --border: {border};
  --text: {text};
  --muted: {muted};
  --danger: {danger};
  --radius: {radius};
}}

* {{
  box-sizing: border-box;
}}

body {{
  margin: 0;
  background: var(--background);
  color: var(--text);
  font-family: {font};
}}

.app-shell {{
  max-width: 960px;
  margin: 0 auto;
  padding: 32px 16px 64px;
}}

.eyebrow {{
  color: var(--primary);
  font-size: 12px;
  font-weight: 700;
  letter-spacing: 0.12em;
  text-transform: uppercase;
  margin: 0 0 4px;
}}

.page-title {{
  font-size: 28px;
  font-weight: 700;
  margin: 0 0 4px;
}}

.page-subtitle {{
  color: var(--muted);
  margin: 0 0 24px;
}}

.card {{
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 20px;
  margin-bottom: 20px;
}}

.card-title {{
  font-size: 16px;
  font-weight: 600;
  margin: 0 0 16px;
}}

.toolbar {{
  display: flex;
  gap: 12px;
  margin-bottom: 16px;
}}

.field {{
  display: flex;
  flex-direction: column;
  gap: 4px;
  margin-bottom: 12px;
}}

.field-label {{
  font-size: 13px;
  font-weight: 600;
}}

.input {{
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 8px 10px;
  font-size: 14px;
  background: var(--surface);
  color: var(--text);
  width: 100%;
}}

.input:focus {{
  outline: 2px solid var(--primary);
  outline-offset: 1px;
}}

.radio-group {{
  display: flex;
  gap: 16px;
  font-size: 14px;
}}

.check-field {{
  display: flex;
  align-items: center;
  gap: 8px;
  font-size: 14px;
}}

.switch-input {{
  width: 36px;
  height: 20px;
  accent-color: var(--primary);
}}

.btn {{
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 8px 14px;
  font-size: 14px;
  font-weight: 600;
  background: var(--surface);
  color: var(--text);
  cursor: pointer;
}}

.btn-primary {{
  background: var(--primary);
  border-color: var(--primary);
  color: var(--primary-contrast);
}}

.btn-primary:hover {{
  background: var(--primary-strong);
}}

.btn-danger {{
  color: var(--danger);
  border-color: var(--danger);
}}

.data-table {{
  width: 100%;
  border-collapse: collapse;
  font-size: 14px;
}}

.data-table th {{
  text-align: left;
  color: var(--muted);
  font-size: 12px;
  text-transform: uppercase;
  letter-spacing: 0.06em;
  padding: 8px;
  border-bottom: 2px solid var(--border);
}}

.data-table td {{
  padding: 8px;
  border-bottom: 1px solid var(--border);
}}

.actions {{
  display: flex;
  gap: 8px;
}}

.form-error {{
  color: var(--danger);
  font-size: 13px;
  margin: 0 0 12px;
}}

.detail-list {{
  margin: 0;
}}

.detail-list dt {{
  font-size: 12px;
  color: var(--muted);
  text-transform: uppercase;
  letter-spacing: 0.06em;
}}

.detail-list dd {{
  margin: 0 0 12px;
  font-size: 14px;
}}

.empty-row {{
  color: var(--muted);
  text-align: center;
  padding: 16px;
}}
"#,
        primary = p.primary,
        primary_strong = p.primary_strong,
        primary_contrast = p.primary_contrast,
        background = p.background,
        surface = p.surface,
        border = p.border,
        text = p.text,
        muted = p.muted,
        danger = p.danger,
        radius = p.radius,
        font = p.font,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_have_distinct_primaries() {
        assert_ne!(palette(Theme::Norte).primary, palette(Theme::Minimal).primary);
    }

    #[test]
    fn stylesheet_carries_tokens_and_regions() {
        let css = stylesheet(Theme::Norte);
        assert!(css.contains("--primary: #0f766e"));
        assert!(css.contains(".eyebrow"));
        assert!(css.contains(".page-title"));
        assert!(css.contains(".card"));
        assert!(css.contains(".data-table"));

        let minimal = stylesheet(Theme::Minimal);
        assert!(minimal.contains("--primary: #111827"));
    }
}
