pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #A855F7;          /* Purple accent used for highlights */
  --primary-dark: #9333EA;     /* Hover and pressed states */
  --primary-muted: #581C87;    /* Tag chips */
  --primary-soft: #E9D5FF;     /* Text on tag chips */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Layout */
  --header-height: 64px;
  --container-width: 1280px;
  --narrow-width: 896px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-20: 80px;
  --space-32: 128px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.3), 0 4px 6px -2px rgba(0, 0, 0, 0.2);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.3), 0 10px 10px -5px rgba(0, 0, 0, 0.2);

  /* Animation */
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Palettes, switched by the class on the root element */
.dark {
  --background: var(--neutral-900);
  --surface: var(--neutral-800);
  --surface-raised: var(--neutral-700);
  --text-primary: #FFFFFF;
  --text-secondary: var(--neutral-400);
  --text-body: var(--neutral-300);
}

.light {
  --background: #FFFFFF;
  --surface: var(--neutral-100);
  --surface-raised: #FFFFFF;
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-500);
  --text-body: var(--neutral-700);
}"#;
