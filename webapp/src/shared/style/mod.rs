use constcat::concat;

mod components;
mod sections;
mod variables;

pub use components::BASE_COMPONENTS;
pub use sections::SECTION_STYLES;
pub use variables::CSS_VARIABLES;

// everything the page needs, bundled into a single style element
pub const PORTFOLIO_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    SECTION_STYLES,
r#"
/* Application shell */
.app {
  min-height: 100vh;
  background-color: var(--background);
  color: var(--text-primary);
}

.app-header {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  color: white;
  background-color: rgba(17, 24, 39, 0.9);
  backdrop-filter: blur(4px);
  box-shadow: var(--shadow-lg);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.brand {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 1.25rem;
  font-weight: 700;
}

.brand-mark {
  color: var(--primary);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  background: none;
  border: none;
  color: inherit;
  font: inherit;
  cursor: pointer;
  transition: color var(--transition-normal) var(--easing-standard);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.menu-toggle {
  display: none;
}

.mobile-menu {
  padding: var(--space-2) var(--space-2) var(--space-3);
}

.mobile-link {
  display: block;
  width: 100%;
  text-align: left;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  background: none;
  border: none;
  color: inherit;
  font: inherit;
  cursor: pointer;
}

.mobile-link:hover {
  background-color: var(--neutral-800);
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .menu-toggle { display: flex; align-items: center; }
}

@media (min-width: 769px) {
  .mobile-menu { display: none; }
}
"#
);
