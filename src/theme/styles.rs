//! Global CSS styles for the CapFlow client.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --paper: #ffffff;
  --paper-tint: #f6f8fa;
  --border: #e3e8ee;

  /* INK (Text) */
  --ink: #12263a;
  --ink-secondary: rgba(18, 38, 58, 0.72);
  --ink-muted: rgba(18, 38, 58, 0.48);

  /* BLUE (Actions, Links) */
  --blue: #1a56db;
  --blue-deep: #15449f;
  --blue-tint: rgba(26, 86, 219, 0.1);

  /* SEMANTIC */
  --success: #137a4d;
  --success-tint: #e4f5ec;
  --danger: #c2344a;
  --danger-tint: #fbeaed;
  --warning: #b9730f;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Radii & Shadows */
  --radius-sm: 6px;
  --radius-md: 10px;
  --shadow-card: 0 1px 3px rgba(18, 38, 58, 0.08), 0 8px 24px rgba(18, 38, 58, 0.06);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--paper-tint);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-heading {
  margin-bottom: 1.5rem;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--ink);
  letter-spacing: -0.01em;
}

.page-subtitle {
  margin-top: 0.25rem;
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

.section-header {
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--ink);
}

/* === Navigation Header === */
.nav-header {
  background: var(--paper);
  border-bottom: 1px solid var(--border);
  position: sticky;
  top: 0;
  z-index: 20;
}

.nav-header-inner {
  max-width: 1120px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  gap: 2rem;
}

.nav-brand {
  font-size: var(--text-lg);
  font-weight: 700;
  text-decoration: none;
  letter-spacing: -0.01em;
}

.nav-brand-mark {
  color: var(--ink);
}

.nav-brand-accent {
  color: var(--blue);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  flex: 1;
}

.nav-link {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.45rem 0.8rem;
  border-radius: var(--radius-sm);
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--ink-secondary);
  text-decoration: none;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-link:hover {
  background: var(--paper-tint);
  color: var(--ink);
}

.nav-link.active {
  background: var(--blue-tint);
  color: var(--blue);
}

.nav-link-icon {
  display: inline-flex;
  align-items: center;
}

.nav-session {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.nav-session-name {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--ink-secondary);
}

.sign-in-link {
  color: var(--blue);
}

/* === Buttons === */
.btn-primary,
.btn-secondary,
.btn-danger,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.4rem;
  padding: 0.55rem 1.1rem;
  border-radius: var(--radius-sm);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  text-decoration: none;
  transition: background var(--transition-fast), border-color var(--transition-fast),
    color var(--transition-fast);
}

.btn-primary {
  background: var(--blue);
  border: 1px solid var(--blue);
  color: #ffffff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--blue-deep);
  border-color: var(--blue-deep);
}

.btn-secondary {
  background: var(--paper);
  border: 1px solid var(--border);
  color: var(--ink);
}

.btn-secondary:hover:not(:disabled) {
  border-color: var(--blue);
  color: var(--blue);
}

.btn-danger {
  background: var(--paper);
  border: 1px solid var(--danger);
  color: var(--danger);
}

.btn-danger:hover:not(:disabled) {
  background: var(--danger-tint);
}

.btn-ghost {
  background: transparent;
  border: 1px solid transparent;
  color: var(--ink-secondary);
}

.btn-ghost:hover:not(:disabled) {
  color: var(--ink);
  background: var(--paper-tint);
}

.btn-primary:disabled,
.btn-secondary:disabled,
.btn-danger:disabled,
.btn-ghost:disabled {
  opacity: 0.55;
  cursor: not-allowed;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 28px;
  height: 28px;
  border: none;
  border-radius: var(--radius-sm);
  background: transparent;
  color: inherit;
  font-size: var(--text-base);
  cursor: pointer;
}

.icon-btn:hover {
  background: rgba(18, 38, 58, 0.08);
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  margin-bottom: 1rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--ink);
}

.input-hint {
  font-weight: 400;
  color: var(--ink-muted);
}

.input-field {
  width: 100%;
  padding: 0.55rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field::placeholder {
  color: var(--ink-muted);
}

.input-field:focus {
  outline: none;
  border-color: var(--blue);
  box-shadow: 0 0 0 3px var(--blue-tint);
}

.input-field.invalid {
  border-color: var(--danger);
}

.input-field.invalid:focus {
  box-shadow: 0 0 0 3px rgba(194, 52, 74, 0.15);
}

.select-field {
  appearance: auto;
}

.select-field.compact {
  width: auto;
  padding: 0.35rem 0.5rem;
}

.field-error {
  font-size: var(--text-xs);
  color: var(--danger);
}

.search-input-wrapper {
  position: relative;
  max-width: 320px;
}

.search-icon {
  position: absolute;
  left: 0.6rem;
  top: 50%;
  transform: translateY(-50%);
  font-size: var(--text-xs);
  pointer-events: none;
}

.search-input {
  padding-left: 2rem;
}

/* === Page Layouts === */
.page {
  min-height: 100vh;
}

.page-content {
  max-width: 1120px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
}

.page-content.narrow {
  max-width: 560px;
}

.page-toolbar {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 1rem;
}

/* === Auth Pages === */
.auth-page {
  min-height: 100vh;
}

.auth-card {
  max-width: 420px;
  margin: 4rem auto 0;
  padding: 2rem;
  background: var(--paper);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  box-shadow: var(--shadow-card);
}

.auth-actions {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-top: 1.25rem;
}

.auth-link {
  font-size: var(--text-sm);
  color: var(--blue);
  text-decoration: none;
}

.auth-link:hover {
  text-decoration: underline;
}

/* === About Page === */
.about-page {
  min-height: 100vh;
  background: var(--paper);
}

.hero {
  max-width: 760px;
  margin: 0 auto;
  padding: 6rem 1.5rem 4rem;
  text-align: center;
}

.hero-title {
  font-size: var(--text-3xl);
  font-weight: 800;
  letter-spacing: -0.02em;
  line-height: 1.15;
}

.hero-tagline {
  margin-top: 1rem;
  font-size: var(--text-lg);
  color: var(--ink-secondary);
}

.hero-cta {
  margin-top: 2rem;
  padding: 0.75rem 1.75rem;
  font-size: var(--text-base);
}

.feature-section {
  max-width: 1120px;
  margin: 0 auto;
  padding: 2rem 1.5rem 5rem;
  text-align: center;
}

.feature-grid {
  margin-top: 2rem;
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
  text-align: left;
}

.feature-card {
  padding: 1.5rem;
  background: var(--paper-tint);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
}

.feature-title {
  font-size: var(--text-base);
  font-weight: 700;
}

.feature-text {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--ink-secondary);
}

.about-footer {
  border-top: 1px solid var(--border);
  padding: 1.5rem;
  text-align: center;
}

.footer-text {
  font-size: var(--text-xs);
  color: var(--ink-muted);
}

/* === Data Table === */
.data-table {
  background: var(--paper);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  overflow: hidden;
}

.table-toolbar {
  padding: 0.9rem 1rem;
  border-bottom: 1px solid var(--border);
}

.table {
  width: 100%;
  border-collapse: collapse;
  font-size: var(--text-sm);
}

.table-head-cell {
  text-align: left;
  padding: 0.65rem 1rem;
  background: var(--paper-tint);
  border-bottom: 1px solid var(--border);
  color: var(--ink-secondary);
  font-size: var(--text-xs);
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.04em;
  white-space: nowrap;
}

.table-head-label {
  display: inline-block;
}

.table-sort-btn {
  display: inline-flex;
  align-items: center;
  gap: 0.3rem;
  border: none;
  background: transparent;
  padding: 0;
  font: inherit;
  color: inherit;
  text-transform: inherit;
  letter-spacing: inherit;
  cursor: pointer;
}

.table-sort-btn:hover,
.table-sort-btn.active {
  color: var(--blue);
}

.sort-indicator {
  font-size: 0.6rem;
}

.table-row {
  border-bottom: 1px solid var(--border);
}

.table-row:hover {
  background: var(--paper-tint);
}

.table-cell {
  padding: 0.65rem 1rem;
  vertical-align: middle;
}

.table-pad-row td {
  padding: 0.65rem 1rem;
  border-bottom: 1px solid transparent;
  color: transparent;
  user-select: none;
}

.table-empty {
  padding: 2.5rem 1rem;
  text-align: center;
  color: var(--ink-muted);
}

.table-action-link {
  color: var(--blue);
  font-weight: 500;
  text-decoration: none;
}

.table-action-link:hover {
  text-decoration: underline;
}

.table-label-cell .role-pill {
  display: inline-block;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 600;
}

.table-label-cell .role-pill.operator {
  background: var(--blue-tint);
  color: var(--blue-deep);
}

.table-label-cell .role-pill.lender {
  background: var(--success-tint);
  color: var(--success);
}

.table-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.75rem 1rem;
  border-top: 1px solid var(--border);
}

.table-page-size {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.table-page-info {
  font-size: var(--text-xs);
  color: var(--ink-muted);
}

.table-pager {
  display: flex;
  gap: 0.5rem;
}

/* === MFA Setup === */
.mfa-panel {
  display: flex;
  gap: 2rem;
  align-items: flex-start;
  padding: 1.5rem;
  background: var(--paper);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
}

.mfa-qr {
  flex-shrink: 0;
  width: 180px;
}

.qr-code svg {
  width: 100%;
  height: auto;
  display: block;
}

.qr-error {
  color: var(--danger);
  font-size: var(--text-sm);
}

.mfa-secret {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
  align-items: flex-start;
}

.mfa-secret-help {
  font-size: var(--text-sm);
  color: var(--ink-secondary);
}

.mfa-secret-value {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  padding: 0.4rem 0.7rem;
  background: var(--paper-tint);
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  word-break: break-all;
}

.mfa-confirm {
  margin-top: 1.5rem;
  max-width: 280px;
}

/* === Settings === */
.settings-card {
  padding: 1.5rem;
  background: var(--paper);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  margin-bottom: 1.5rem;
}

.settings-list {
  margin-top: 1rem;
  display: grid;
  grid-template-columns: 120px 1fr;
  row-gap: 0.5rem;
  font-size: var(--text-sm);
}

.settings-list dt {
  color: var(--ink-muted);
}

.settings-help {
  margin: 0.75rem 0 1rem;
  font-size: var(--text-sm);
  color: var(--ink-secondary);
}

.settings-mfa-link {
  display: inline-flex;
}

/* === User Form === */
.user-form {
  padding: 1.5rem;
  background: var(--paper);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
}

.form-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 1.25rem;
}

/* === Notifications === */
.notice-stack {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  max-width: 360px;
}

.notice {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  padding: 0.7rem 0.9rem;
  border-radius: var(--radius-sm);
  border: 1px solid var(--border);
  box-shadow: var(--shadow-card);
  font-size: var(--text-sm);
  animation: notice-in 200ms ease;
}

.notice.success {
  background: var(--success-tint);
  border-color: var(--success);
  color: var(--success);
}

.notice.error {
  background: var(--danger-tint);
  border-color: var(--danger);
  color: var(--danger);
}

.notice-text {
  flex: 1;
}

@keyframes notice-in {
  from {
    opacity: 0;
    transform: translateY(-6px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

/* === Empty & Loading States === */
.loading-state,
.empty-state {
  padding: 3rem 1rem;
  text-align: center;
  color: var(--ink-muted);
}

/* === Accessibility === */
:focus-visible {
  outline: 2px solid var(--blue);
  outline-offset: 2px;
}

/* === Responsive Layout for Narrow Windows === */
@media (max-width: 860px) {
  .feature-grid {
    grid-template-columns: 1fr;
  }

  .mfa-panel {
    flex-direction: column;
  }

  .nav-link-label {
    display: none;
  }

  .table-footer {
    flex-wrap: wrap;
  }
}
"#;
