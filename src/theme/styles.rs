//! Global CSS styles for CardGen.
//!
//! Light and dark palettes are selected by `data-theme` on the app root. The
//! card preview reads its colors from the inline variables the preview
//! surface sets, so the app theme never leaks into the card.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root,
[data-theme="light"] {
  --bg: #f8fafc;
  --surface: #ffffff;
  --surface-muted: #f1f5f9;
  --border: #e2e8f0;
  --text: #0f172a;
  --text-muted: #64748b;
  --accent: #2563eb;
  --accent-contrast: #ffffff;
  --danger: #dc2626;
  --success: #16a34a;
  --warning: #d97706;
  --info: #0284c7;
  --shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
}

[data-theme="dark"] {
  --bg: #0f172a;
  --surface: #1e293b;
  --surface-muted: #273449;
  --border: #334155;
  --text: #f1f5f9;
  --text-muted: #94a3b8;
  --accent: #60a5fa;
  --accent-contrast: #0f172a;
  --danger: #f87171;
  --success: #4ade80;
  --warning: #fbbf24;
  --info: #38bdf8;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
}

/* === Base === */
* {
  box-sizing: border-box;
}

html, body {
  margin: 0;
  padding: 0;
  font-family: 'Inter', system-ui, sans-serif;
}

.app-root {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
  transition: background 0.2s ease, color 0.2s ease;
}

.page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 24px 48px;
}

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  gap: 24px;
  padding: 16px 0;
  border-bottom: 1px solid var(--border);
  margin-bottom: 24px;
}

.nav-title {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--accent);
}

.nav-links {
  display: flex;
  gap: 16px;
  flex: 1;
}

.nav-link {
  color: var(--text-muted);
  text-decoration: none;
  padding: 4px 8px;
  border-radius: 6px;
}

.nav-link:hover,
.nav-link--active {
  color: var(--text);
  background: var(--surface-muted);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 6px;
  padding: 8px 16px;
  border-radius: 8px;
  border: 1px solid transparent;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  text-decoration: none;
  transition: opacity 0.15s ease, background 0.15s ease;
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn--busy {
  cursor: progress;
}

.btn-primary {
  background: var(--accent);
  color: var(--accent-contrast);
}

.btn-secondary {
  background: var(--surface-muted);
  color: var(--text);
  border-color: var(--border);
}

.btn-ghost {
  background: transparent;
  color: var(--accent);
}

.btn-danger {
  background: transparent;
  color: var(--danger);
  border-color: var(--danger);
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-muted);
  font-size: 1.2rem;
  cursor: pointer;
  padding: 4px 8px;
  border-radius: 6px;
}

.icon-btn:hover {
  color: var(--text);
  background: var(--surface-muted);
}

/* === Notices === */
.notice-stack {
  display: flex;
  flex-direction: column;
  gap: 8px;
  margin-bottom: 16px;
}

.notice {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 10px 14px;
  border-radius: 8px;
  border-left: 4px solid;
  background: var(--surface);
  box-shadow: var(--shadow);
}

.notice-message {
  flex: 1;
}

.notice-info { border-color: var(--info); }
.notice-success { border-color: var(--success); }
.notice-warning { border-color: var(--warning); }
.notice-error { border-color: var(--danger); }

/* === Editor Layout === */
.editor-layout {
  display: grid;
  grid-template-columns: minmax(320px, 420px) 1fr;
  gap: 32px;
  align-items: start;
}

.panel {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 20px;
  box-shadow: var(--shadow);
}

.tabs {
  display: flex;
  gap: 4px;
  margin-bottom: 16px;
  border-bottom: 1px solid var(--border);
}

.tab {
  background: none;
  border: none;
  border-bottom: 2px solid transparent;
  padding: 8px 16px;
  font: inherit;
  color: var(--text-muted);
  cursor: pointer;
}

.tab--active {
  color: var(--accent);
  border-bottom-color: var(--accent);
}

.tab-panel {
  display: flex;
  flex-direction: column;
  gap: 14px;
}

/* === Form === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.input-label {
  font-size: 0.85rem;
  font-weight: 600;
  color: var(--text-muted);
}

.input-field {
  padding: 8px 10px;
  border: 1px solid var(--border);
  border-radius: 6px;
  background: var(--surface-muted);
  color: var(--text);
  font: inherit;
}

.input-field:focus {
  outline: 2px solid var(--accent);
  outline-offset: -1px;
}

.textarea {
  resize: vertical;
}

.color-row {
  display: flex;
  align-items: center;
  gap: 10px;
}

.color-input {
  width: 44px;
  height: 32px;
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 0;
  background: none;
}

.color-value {
  color: var(--text-muted);
}

.checkbox-field {
  flex-direction: row;
  align-items: center;
}

.logo-upload-actions {
  display: flex;
  gap: 8px;
  margin-top: 6px;
}

/* === Preview === */
.editor-preview {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 24px;
  position: sticky;
  top: 24px;
}

.editor-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 8px;
}

.card-preview {
  position: relative;
  width: 350px;
  height: 200px;
  overflow: hidden;
  color: var(--text-color);
  box-shadow: 0 12px 32px rgba(15, 23, 42, 0.2);
}

.card-preview--compact {
  transform: scale(0.7);
  transform-origin: top left;
  margin-bottom: -60px;
  margin-right: -105px;
}

.template-element {
  position: absolute;
  top: 0;
  left: 0;
  width: 6px;
  height: 100%;
}

.card-logo-container {
  position: absolute;
  top: 16px;
  right: 16px;
  width: 56px;
  height: 56px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.card-logo {
  max-width: 100%;
  max-height: 100%;
  object-fit: contain;
}

.card-body {
  position: absolute;
  inset: 20px 24px 20px 28px;
  display: flex;
  flex-direction: column;
}

.card-name {
  margin: 0;
  font-size: 1.35rem;
  font-weight: 700;
}

.card-title {
  margin: 2px 0 0;
  font-size: 0.85rem;
  color: var(--primary-color);
  font-weight: 600;
}

.card-contact {
  margin-top: auto;
  font-size: 0.72rem;
  line-height: 1.45;
}

.card-contact-line {
  margin: 0;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

/* === Templates === */
.template-modern-dark .card-title {
  color: var(--primary-color);
  letter-spacing: 0.08em;
  text-transform: uppercase;
}

.template-creative .template-element {
  width: 100%;
  height: 6px;
}

.template-creative .card-name {
  font-size: 1.5rem;
}

.template-minimal .template-element {
  display: none;
}

.template-minimal .card-body {
  align-items: center;
  text-align: center;
}

/* === Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(15, 23, 42, 0.6);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.modal {
  background: var(--surface);
  color: var(--text);
  border-radius: 12px;
  padding: 20px 24px;
  min-width: 280px;
  box-shadow: var(--shadow);
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 12px;
}

.modal-header h3 {
  margin: 0;
}

.qr-code {
  display: flex;
  justify-content: center;
  padding: 12px;
  background: #ffffff;
  border-radius: 8px;
}

.qr-data {
  text-align: center;
  color: var(--text-muted);
  font-size: 0.85rem;
  word-break: break-all;
}

/* === Gallery === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 24px;
}

.gallery-item {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 16px;
  display: flex;
  flex-direction: column;
  gap: 10px;
}

.gallery-meta {
  display: flex;
  justify-content: space-between;
  gap: 8px;
}

.gallery-name {
  font-weight: 600;
}

.gallery-date {
  color: var(--text-muted);
  font-size: 0.8rem;
}

.empty-state {
  text-align: center;
  padding: 64px 0;
  color: var(--text-muted);
}

@media (max-width: 860px) {
  .editor-layout {
    grid-template-columns: 1fr;
  }

  .editor-preview {
    position: static;
  }
}
"#;
