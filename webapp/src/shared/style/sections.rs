pub const SECTION_STYLES: &str = r#"
/* Portfolio Section Styles */

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.container.narrow {
  max-width: var(--narrow-width);
}

.page-section {
  padding: var(--space-20) 0;
}

.page-section.alt {
  background-color: var(--surface);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-12);
}

.accent {
  color: var(--primary);
}

/* Hero */
.hero {
  position: relative;
  overflow: hidden;
  padding: var(--space-32) 0 var(--space-20);
  text-align: center;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  z-index: 0;
  background: linear-gradient(to right, rgba(88, 28, 135, 0.2), rgba(30, 58, 138, 0.2));
}

.star {
  position: absolute;
  border-radius: var(--radius-full);
  background-color: white;
}

@keyframes twinkle {
  0% { opacity: 0.2; }
  50% { opacity: 1; }
  100% { opacity: 0.2; }
}

.hero-content {
  position: relative;
  z-index: 10;
}

.hero-mark {
  font-size: 4rem;
  color: var(--primary);
  margin-bottom: var(--space-8);
}

.hero-title {
  font-size: 3.75rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.hero-subtitle {
  font-size: 1.5rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}

.social-links {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
}

.social-link {
  padding: var(--space-2);
  border-radius: var(--radius-full);
  color: inherit;
  font-weight: 600;
}

.social-link:hover {
  background-color: var(--neutral-800);
}

/* About */
.about-text {
  font-size: 1.125rem;
  margin-bottom: var(--space-6);
  color: var(--text-body);
}

.highlights {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-8);
  margin-top: var(--space-12);
}

.highlight {
  text-align: center;
}

.highlight-icon {
  font-size: 2.5rem;
  color: var(--primary);
  margin-bottom: var(--space-4);
}

.highlight h3 {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

/* Projects */
.project-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-8);
  max-width: var(--narrow-width);
  margin: 0 auto;
}

.project-card {
  display: block;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  overflow: hidden;
  box-shadow: var(--shadow-xl);
  color: inherit;
  text-decoration: none;
}

.project-cover {
  position: relative;
}

.project-cover img {
  width: 100%;
  height: 12rem;
  object-fit: cover;
  display: block;
}

.project-cover::after {
  content: "";
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, var(--neutral-900), transparent);
  opacity: 0.6;
}

.project-body {
  padding: var(--space-6);
}

.project-body h3 {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.project-body p {
  color: var(--text-body);
  margin-bottom: var(--space-4);
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

.project-link {
  color: var(--primary);
}

/* CV */
.cv-download {
  display: flex;
  justify-content: center;
  margin-bottom: var(--space-8);
}

.cv-block {
  margin-bottom: var(--space-12);
}

.cv-block h3 {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary);
  margin-bottom: var(--space-6);
}

.timeline-entry {
  border-left: 2px solid var(--primary);
  padding-left: var(--space-4);
  margin-bottom: var(--space-8);
}

.timeline-entry h4 {
  font-size: 1.25rem;
  font-weight: 600;
}

.timeline-entry .byline {
  color: var(--text-secondary);
}

.timeline-entry .summary {
  margin-top: var(--space-2);
}

.skill-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-4);
}

.skill-group {
  background-color: var(--surface);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
}

.skill-group h4 {
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.skill-group ul {
  list-style: none;
  color: var(--text-body);
}

/* Footer */
.site-footer {
  background-color: var(--neutral-900);
  padding: var(--space-8) 0;
  text-align: center;
  color: var(--neutral-400);
}

@media (max-width: 768px) {
  .hero { padding-top: var(--space-20); }
  .hero-title { font-size: 2.25rem; }
  .hero-subtitle { font-size: 1.25rem; }
  .section-title { font-size: 1.875rem; }
  .highlights, .project-grid { grid-template-columns: 1fr; }
  .skill-grid { grid-template-columns: repeat(2, 1fr); }
}
"#;
