//! Global CSS styles for the Lovenote card.
//!
//! Cinematic Valentine aesthetic: plum void, rose aurora, frosted glass.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-plum: #07040b;
  --void-letter: rgba(17, 8, 19, 0.9);

  /* AURORA (Glow blobs) */
  --rose: rgba(244, 63, 94, 0.55);
  --pink: rgba(236, 72, 153, 0.55);
  --purple: rgba(168, 85, 247, 0.42);
  --blush: rgba(251, 113, 133, 0.45);

  /* GLASS (Surfaces) */
  --glass-bg: rgba(255, 255, 255, 0.07);
  --glass-border: rgba(255, 255, 255, 0.10);
  --glass-hover: rgba(255, 255, 255, 0.10);

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.7);
  --text-muted: rgba(255, 255, 255, 0.55);

  /* ACCENT */
  --rose-badge: rgba(253, 164, 175, 0.1);
  --rose-badge-border: rgba(253, 164, 175, 0.3);
  --rose-badge-text: #ffe4e6;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', -apple-system, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-hero: 3rem;

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
  background: var(--void-plum);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

.card-root {
  position: relative;
  min-height: 100vh;
}

/* === Keyframes === */
@keyframes twinkle {
  0% { opacity: 0.25; transform: scale(1); }
  50% { opacity: 0.9; transform: scale(1.15); }
  100% { opacity: 0.4; transform: scale(1); }
}

@keyframes float-up {
  0% { transform: translateY(0); opacity: var(--o, 0.2); }
  100% { transform: translateY(-980px); opacity: 0; }
}

@keyframes pop-burst {
  0% { opacity: 0; transform: translate(0, 0) rotate(0deg) scale(1); }
  10% { opacity: 1; }
  100% {
    opacity: 0;
    transform: translate(var(--x, 0px), var(--y, 560px)) rotate(var(--r, 0deg)) scale(var(--s, 1));
  }
}

@keyframes fade-in-up {
  0% { opacity: 0; transform: translateY(12px); }
  100% { opacity: 1; transform: translateY(0); }
}

@keyframes soft-pulse {
  0%, 100% { opacity: 0.35; }
  50% { opacity: 0.55; }
}

.fade-in-up { animation: fade-in-up 450ms ease-out both; }
.twinkle { animation: twinkle var(--d, 6s) ease-in-out infinite; }
.float-up { animation: float-up var(--d, 10s) ease-in-out infinite; }
.pulse-soft { animation: soft-pulse 3.6s ease-in-out infinite; }

/* Reduced motion: launch flag mirrors prefers-reduced-motion */
.reduced-motion .twinkle,
.reduced-motion .float-up,
.reduced-motion .pulse-soft {
  animation: none !important;
}

/* === Background Layers === */
.aura-layer {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.aura-blob {
  position: absolute;
  border-radius: 50%;
  filter: blur(64px);
  opacity: 0.75;
}

.aura-blob.top-left {
  top: -11rem;
  left: -11rem;
  width: 42rem;
  height: 42rem;
  background:
    radial-gradient(circle at 30% 30%, var(--rose), transparent 60%),
    radial-gradient(circle at 70% 70%, var(--pink), transparent 60%);
}

.aura-blob.bottom-right {
  bottom: -13rem;
  right: -13rem;
  width: 46rem;
  height: 46rem;
  background:
    radial-gradient(circle at 30% 30%, var(--purple), transparent 60%),
    radial-gradient(circle at 70% 70%, var(--blush), transparent 60%);
}

.aura-vignette {
  position: absolute;
  inset: 0;
  background: linear-gradient(
    to bottom,
    rgba(0, 0, 0, 0.1),
    rgba(0, 0, 0, 0.2),
    rgba(0, 0, 0, 0.75)
  );
}

.top-glow {
  position: absolute;
  left: 50%;
  top: 2.5rem;
  width: 42rem;
  height: 16rem;
  transform: translateX(-50%);
  border-radius: 50%;
  filter: blur(64px);
  opacity: 0.4;
  background: radial-gradient(circle at 50% 50%, rgba(255, 255, 255, 0.18), transparent 60%);
  pointer-events: none;
}

/* === Starfield === */
.starfield {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.star {
  position: absolute;
  border-radius: 50%;
  background: #fff;
  box-shadow: 0 0 14px rgba(255, 255, 255, 0.22);
}

/* === Floating Hearts === */
.hearts-layer {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.floating-heart {
  position: absolute;
  bottom: -2.5rem;
  color: rgba(255, 255, 255, 0.8);
}

/* === Heart Burst === */
.burst-layer {
  position: fixed;
  inset: 0;
  z-index: 40;
  display: flex;
  align-items: flex-start;
  justify-content: center;
  padding-top: 5rem;
  pointer-events: none;
}

.burst-piece {
  position: absolute;
  color: rgba(255, 255, 255, 0.9);
  filter: drop-shadow(0 0 10px rgba(255, 255, 255, 0.18));
  animation: pop-burst var(--d, 1s) ease-out forwards;
}

/* === Header === */
.card-header {
  position: sticky;
  top: 0;
  z-index: 30;
  border-bottom: 1px solid var(--glass-border);
  background: rgba(0, 0, 0, 0.2);
  backdrop-filter: blur(24px);
}

.header-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.header-title-block {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.header-icon-badge {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 1rem;
  border: 1px solid rgba(255, 255, 255, 0.12);
  background: rgba(255, 255, 255, 0.05);
}

.app-title {
  font-size: var(--text-sm);
  font-weight: 600;
}

.app-subtitle {
  font-size: 11px;
  letter-spacing: 0.05em;
  color: var(--text-muted);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.nav-link {
  border-radius: 1rem;
  border: 1px solid var(--glass-border);
  background: rgba(255, 255, 255, 0.05);
  color: rgba(255, 255, 255, 0.75);
  font-size: var(--text-xs);
  font-weight: 600;
  padding: 0.4rem 0.75rem;
  cursor: pointer;
  transition: background var(--transition-fast);
  text-decoration: none;
  font-family: inherit;
}

.nav-link:hover {
  background: var(--glass-hover);
}

.nav-link.active {
  border-color: rgba(255, 255, 255, 0.25);
  background: rgba(255, 255, 255, 0.10);
  color: var(--text-primary);
}

.burst-btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border-radius: 1rem;
  border: 1px solid rgba(255, 255, 255, 0.12);
  background: rgba(255, 255, 255, 0.05);
  color: rgba(255, 255, 255, 0.8);
  font-size: var(--text-xs);
  font-weight: 600;
  font-family: inherit;
  padding: 0.5rem 0.75rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.burst-btn:hover {
  background: var(--glass-hover);
}

.mobile-nav {
  display: none;
  gap: 0.5rem;
  overflow-x: auto;
  margin-bottom: 1.5rem;
}

/* === Main Layout === */
.card-main {
  position: relative;
  max-width: 72rem;
  margin: 0 auto;
  padding: 2.5rem 1.5rem 5rem;
}

.split-main {
  display: grid;
  gap: 1.5rem;
  grid-template-columns: 7fr 5fr;
  align-items: start;
}

.split-wide {
  display: grid;
  gap: 1.5rem;
  grid-template-columns: 2fr 1fr;
  align-items: start;
}

.stat-row {
  display: grid;
  gap: 1rem;
  grid-template-columns: repeat(3, 1fr);
  margin-top: 1rem;
}

.stack {
  display: grid;
  gap: 1rem;
}

/* === Glass Card === */
.glass-card {
  border-radius: 1.5rem;
  border: 1px solid var(--glass-border);
  background: var(--glass-bg);
  box-shadow: 0 18px 70px rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(24px);
  padding: 1.5rem;
}

.inset-card {
  border-radius: 1rem;
  border: 1px solid var(--glass-border);
  background: rgba(255, 255, 255, 0.04);
  padding: 1rem;
}

.card-label {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-primary);
}

/* === Pills === */
.pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border-radius: 9999px;
  border: 1px solid rgba(255, 255, 255, 0.15);
  background: rgba(255, 255, 255, 0.05);
  padding: 0.25rem 0.75rem;
  font-size: var(--text-xs);
  color: rgba(255, 255, 255, 0.85);
  backdrop-filter: blur(8px);
}

.pill-row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.5rem;
}

/* === Section Title === */
.section-title {
  margin-bottom: 1.5rem;
}

.section-title-row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
}

.section-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 1rem;
  border: 1px solid rgba(255, 255, 255, 0.12);
  background: rgba(255, 255, 255, 0.05);
}

.section-kicker {
  font-size: var(--text-xs);
  font-weight: 600;
  letter-spacing: 0.24em;
  color: rgba(255, 255, 255, 0.6);
}

.section-heading {
  font-size: var(--text-xl);
  font-weight: 600;
  color: var(--text-primary);
}

.section-subtitle {
  margin-top: 0.75rem;
  max-width: 48rem;
  font-size: var(--text-sm);
  line-height: 1.7;
  color: var(--text-secondary);
}

/* === Buttons === */
.btn-primary {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border-radius: 1rem;
  border: 1px solid rgba(255, 255, 255, 0.15);
  background: rgba(255, 255, 255, 0.10);
  color: var(--text-primary);
  font-size: var(--text-sm);
  font-weight: 600;
  font-family: inherit;
  padding: 0.75rem 1.25rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary:hover {
  background: rgba(255, 255, 255, 0.15);
}

.btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border-radius: 1rem;
  border: 1px solid rgba(255, 255, 255, 0.12);
  background: rgba(255, 255, 255, 0.05);
  color: rgba(255, 255, 255, 0.8);
  font-size: var(--text-sm);
  font-weight: 600;
  font-family: inherit;
  padding: 0.75rem 1.25rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-ghost:hover {
  background: var(--glass-hover);
}

.btn-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

/* === Hero === */
.hero-headline {
  font-size: var(--text-hero);
  font-weight: 600;
  line-height: 1.15;
  margin-top: 1.5rem;
}

.gradient-text {
  display: block;
  background: linear-gradient(to right, #fff, rgba(255, 255, 255, 0.9), rgba(255, 255, 255, 0.6));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-lede {
  margin-top: 1rem;
  max-width: 36rem;
  font-size: var(--text-sm);
  line-height: 1.7;
  color: var(--text-secondary);
}

.stat-card {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.stat-title {
  font-size: var(--text-sm);
  font-weight: 600;
}

.stat-caption {
  font-size: var(--text-xs);
  color: rgba(255, 255, 255, 0.6);
}

/* === Timeline === */
.timeline-item {
  position: relative;
  padding-left: 2.25rem;
}

.timeline-index {
  position: absolute;
  left: 0;
  top: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 1.75rem;
  height: 1.75rem;
  border-radius: 50%;
  border: 1px solid rgba(255, 255, 255, 0.15);
  background: rgba(255, 255, 255, 0.05);
  font-size: var(--text-xs);
  font-weight: 600;
  color: rgba(255, 255, 255, 0.8);
}

.timeline-card {
  border-radius: 1rem;
  border: 1px solid var(--glass-border);
  background: rgba(255, 255, 255, 0.05);
  padding: 1rem;
}

.timeline-head {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
}

.timeline-title {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-primary);
}

.timeline-meta {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.timeline-text {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  line-height: 1.7;
  color: var(--text-secondary);
}

/* === Persona Cards === */
.persona-head {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
}

.persona-name {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-primary);
}

.persona-role {
  font-size: var(--text-xs);
  color: rgba(255, 255, 255, 0.6);
}

.persona-avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  border: 1px solid rgba(255, 255, 255, 0.15);
  background: linear-gradient(135deg, rgba(244, 114, 182, 0.35), rgba(167, 139, 250, 0.3));
  font-size: var(--text-sm);
  font-weight: 700;
  letter-spacing: 0.05em;
  color: var(--text-primary);
}

.persona-text {
  margin-top: 0.75rem;
  font-size: var(--text-sm);
  line-height: 1.7;
  color: var(--text-secondary);
}

/* === Quiz === */
.quiz-head {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.quiz-progress {
  font-size: var(--text-xs);
  color: rgba(255, 255, 255, 0.6);
}

.quiz-question {
  margin-top: 1rem;
  font-size: var(--text-base);
  font-weight: 600;
  color: var(--text-primary);
}

.choice-list {
  display: grid;
  gap: 0.5rem;
  margin-top: 1rem;
}

.choice-btn {
  width: 100%;
  border-radius: 1rem;
  border: 1px solid var(--glass-border);
  background: rgba(255, 255, 255, 0.05);
  color: rgba(255, 255, 255, 0.8);
  font-size: var(--text-sm);
  font-family: inherit;
  text-align: left;
  padding: 0.75rem 1rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.choice-btn:hover {
  background: var(--glass-hover);
}

.choice-btn.active {
  border-color: rgba(255, 255, 255, 0.30);
  background: rgba(255, 255, 255, 0.12);
  color: var(--text-primary);
}

.quiz-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-top: 1rem;
}

.quiz-score {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.quiz-score strong {
  color: rgba(255, 255, 255, 0.85);
}

.quiz-summary {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  line-height: 1.7;
  color: var(--text-secondary);
}

/* === Letter Vault === */
.vault-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border-radius: 9999px;
  border: 1px solid;
  padding: 0.25rem 0.75rem;
  font-size: var(--text-xs);
  font-weight: 600;
}

.vault-badge.locked {
  border-color: rgba(255, 255, 255, 0.12);
  background: rgba(255, 255, 255, 0.05);
  color: rgba(255, 255, 255, 0.65);
}

.vault-badge.unlocked {
  border-color: var(--rose-badge-border);
  background: var(--rose-badge);
  color: var(--rose-badge-text);
}

.vault-open-btn {
  width: 100%;
  justify-content: center;
  margin-top: 1rem;
}

.vault-open-btn:disabled {
  cursor: not-allowed;
  border-color: var(--glass-border);
  background: rgba(255, 255, 255, 0.05);
  color: rgba(255, 255, 255, 0.45);
}

/* === Letter Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.6);
}

.letter-modal {
  position: relative;
  width: 100%;
  max-width: 42rem;
  overflow: hidden;
  border-radius: 1.5rem;
  border: 1px solid rgba(255, 255, 255, 0.15);
  background: var(--void-letter);
  box-shadow: 0 30px 90px rgba(0, 0, 0, 0.65);
  backdrop-filter: blur(32px);
}

.letter-head {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem;
  border-bottom: 1px solid var(--glass-border);
}

.letter-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-primary);
}

.letter-close-btn {
  border-radius: 0.75rem;
  border: 1px solid rgba(255, 255, 255, 0.15);
  background: rgba(255, 255, 255, 0.05);
  color: rgba(255, 255, 255, 0.8);
  font-size: var(--text-xs);
  font-weight: 600;
  font-family: inherit;
  padding: 0.4rem 0.75rem;
  cursor: pointer;
}

.letter-close-btn:hover {
  background: var(--glass-hover);
}

.letter-body {
  padding: 1.25rem;
}

.letter-paper {
  border-radius: 1rem;
  border: 1px solid var(--glass-border);
  background: rgba(255, 255, 255, 0.04);
  padding: 1rem;
}

.letter-markdown {
  font-size: var(--text-sm);
  line-height: 1.7;
  color: rgba(255, 255, 255, 0.9);
}

.letter-markdown p {
  margin-bottom: 0.75rem;
}

.letter-markdown p:last-child {
  margin-bottom: 0;
}

/* === Dedication Video === */
.video-note {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.video-frame {
  margin-top: 1rem;
  overflow: hidden;
  border-radius: 1rem;
  border: 1px solid var(--glass-border);
}

.video-frame iframe {
  display: block;
  width: 100%;
  height: 14rem;
  border: 0;
}

.video-links {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-top: 1rem;
}

.video-caption {
  align-self: center;
  font-size: var(--text-xs);
  color: rgba(255, 255, 255, 0.5);
}

.external-link {
  text-decoration: none;
}

/* === Finale === */
.finale-card {
  position: relative;
  overflow: hidden;
  padding: 2.5rem;
}

.finale-glow {
  position: absolute;
  border-radius: 50%;
  filter: blur(64px);
  opacity: 0.4;
  pointer-events: none;
}

.finale-glow.left {
  top: -5rem;
  left: -5rem;
  width: 18rem;
  height: 18rem;
  background: radial-gradient(circle at 30% 30%, rgba(244, 63, 94, 0.45), transparent 60%);
}

.finale-glow.right {
  bottom: -6rem;
  right: -6rem;
  width: 20rem;
  height: 20rem;
  background: radial-gradient(circle at 60% 60%, rgba(168, 85, 247, 0.35), transparent 60%);
}

.finale-content {
  position: relative;
}

.finale-grid {
  display: grid;
  gap: 0.75rem;
  grid-template-columns: repeat(2, 1fr);
  margin-top: 1.75rem;
}

.finale-signoff {
  margin-top: 1.5rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Footer === */
.card-footer {
  position: relative;
  border-top: 1px solid var(--glass-border);
  background: rgba(0, 0, 0, 0.2);
}

.footer-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 1.5rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Misc Text === */
.muted-note {
  margin-top: 1.25rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.body-text {
  font-size: var(--text-sm);
  line-height: 1.7;
  color: var(--text-secondary);
}

.body-text strong {
  color: var(--text-primary);
}

/* === Responsive === */
@media (max-width: 900px) {
  .split-main,
  .split-wide,
  .finale-grid {
    grid-template-columns: 1fr;
  }

  .stat-row {
    grid-template-columns: 1fr;
  }

  .nav-links {
    display: none;
  }

  .mobile-nav {
    display: flex;
  }

  .hero-headline {
    font-size: var(--text-2xl);
  }
}
"#;
