//! Stylesheet emitted alongside the generated portfolio page.

pub const STYLESHEET: &str = r#"/* Portfolio stylesheet */

:root {
  --primary: #0b66ff;
  --primary-dark: #0846b0;
  --bg: #0d1117;
  --surface: #161b22;
  --border: #30363d;
  --text: #e6edf3;
  --text-muted: #8b949e;
}

* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  background: var(--bg);
  color: var(--text);
  line-height: 1.6;
}

.container {
  max-width: 1080px;
  margin: 0 auto;
  padding: 0 24px;
}

.navbar {
  position: sticky;
  top: 0;
  background: rgba(13, 17, 23, 0.92);
  border-bottom: 1px solid var(--border);
  backdrop-filter: blur(8px);
  z-index: 10;
}

.nav-container {
  max-width: 1080px;
  margin: 0 auto;
  padding: 16px 24px;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  color: var(--text);
  font-weight: 700;
  text-decoration: none;
}

.nav-links {
  display: flex;
  gap: 24px;
  list-style: none;
}

.nav-links a {
  color: var(--text-muted);
  text-decoration: none;
  transition: color 0.2s;
}

.nav-links a:hover {
  color: var(--primary);
}

.hero {
  padding: 120px 24px 96px;
  text-align: center;
  background: radial-gradient(ellipse at top, rgba(11, 102, 255, 0.18), transparent 60%);
}

.hero-title {
  font-size: clamp(2.4rem, 6vw, 4rem);
  margin-bottom: 12px;
}

.hero-description {
  color: var(--text-muted);
  margin-bottom: 32px;
}

.hero-buttons {
  display: flex;
  gap: 16px;
  justify-content: center;
}

.btn {
  padding: 12px 24px;
  border-radius: 8px;
  text-decoration: none;
  font-weight: 600;
  transition: transform 0.15s, background 0.2s;
}

.btn:hover {
  transform: translateY(-2px);
}

.btn-primary {
  background: var(--primary);
  color: #fff;
}

.btn-primary:hover {
  background: var(--primary-dark);
}

.btn-secondary {
  border: 1px solid var(--border);
  color: var(--text);
}

.section {
  padding: 72px 0;
  border-top: 1px solid var(--border);
}

.section-title {
  font-size: 1.6rem;
  margin-bottom: 28px;
}

.two-col {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 48px;
}

.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 20px;
}

.project-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 10px;
  padding: 20px;
  transition: border-color 0.2s, transform 0.15s;
}

.project-card:hover {
  border-color: var(--primary);
  transform: translateY(-3px);
}

.project-title {
  margin-bottom: 10px;
}

.project-desc,
.timeline-desc {
  color: var(--text-muted);
  padding-left: 18px;
}

.timeline-item {
  border-left: 2px solid var(--border);
  padding: 0 0 24px 20px;
  position: relative;
}

.timeline-item::before {
  content: "";
  position: absolute;
  left: -6px;
  top: 6px;
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: var(--primary);
}

.timeline-title {
  margin-bottom: 4px;
}

.timeline-meta {
  color: var(--text-muted);
  font-size: 0.9rem;
  margin-bottom: 8px;
}

.skills-grid {
  display: flex;
  flex-wrap: wrap;
  gap: 10px;
}

.skill-item {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: 8px 16px;
  font-size: 0.9rem;
}

.contact-links {
  display: flex;
  flex-wrap: wrap;
  gap: 16px;
}

.contact-link {
  color: var(--primary);
  text-decoration: none;
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 10px 18px;
  transition: border-color 0.2s;
}

.contact-link:hover {
  border-color: var(--primary);
}

.no-content {
  color: var(--text-muted);
}

.footer {
  border-top: 1px solid var(--border);
  padding: 32px 0;
  text-align: center;
  color: var(--text-muted);
  font-size: 0.9rem;
}

@media (max-width: 720px) {
  .two-col {
    grid-template-columns: 1fr;
  }

  .nav-links {
    display: none;
  }
}
"#;
