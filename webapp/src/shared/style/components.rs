pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-lg);
  font-weight: 500;
  cursor: pointer;
  border: none;
  outline: none;
  transition: background-color var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.btn-primary {
  background-color: var(--primary-dark);
  color: white;
}

.btn-primary:hover {
  background-color: var(--primary);
  transform: scale(1.05);
}

.icon-btn {
  padding: var(--space-2);
  border-radius: var(--radius-lg);
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
  font-size: 1.25rem;
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.icon-btn:hover {
  background-color: var(--neutral-800);
}

/* Cards */
.card {
  background-color: var(--surface-raised);
  border-radius: var(--radius-lg);
  padding: var(--space-8);
  box-shadow: var(--shadow-xl);
}

.lift {
  transition: transform var(--transition-normal) var(--easing-standard);
}

.lift:hover {
  transform: scale(1.05);
}

.chip {
  padding: var(--space-1) var(--space-3);
  background-color: var(--primary-muted);
  color: var(--primary-soft);
  border-radius: var(--radius-full);
  font-size: 0.875rem;
}

/* Error panels */
.error-panel {
  max-width: var(--narrow-width);
  margin: var(--space-32) auto;
  padding: var(--space-8);
  text-align: center;
}

.error-panel pre {
  margin-top: var(--space-4);
  white-space: pre-wrap;
  color: #EF4444;
}
"#;
