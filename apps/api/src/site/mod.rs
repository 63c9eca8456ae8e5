//! Static portfolio site renderer.
//!
//! Consumes a [`ResumeRecord`] and produces the HTML/CSS pair for a
//! single-page portfolio. Every field is treated as optionally empty, and
//! every interpolated string is HTML-escaped here before embedding.

mod styles;

use crate::models::record::{ContactInfo, EducationEntry, ExperienceEntry, ProjectEntry, ResumeRecord};

/// The rendered site files, ready for packaging.
#[derive(Debug, Clone)]
pub struct SiteBundle {
    pub html: String,
    pub css: String,
}

pub fn generate(record: &ResumeRecord) -> SiteBundle {
    SiteBundle {
        html: render_html(record),
        css: styles::STYLESHEET.to_string(),
    }
}

fn render_html(record: &ResumeRecord) -> String {
    let name = escape_html(&record.name);

    format!(
        r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width,initial-scale=1">
  <title>{name} — Portfolio</title>
  <link rel="stylesheet" href="styles.css">
</head>
<body>
  <nav class="navbar">
    <div class="nav-container">
      <a href="#" class="nav-brand">{name}</a>
      <ul class="nav-links">
        <li><a href="#about">About</a></li>
        <li><a href="#projects">Projects</a></li>
        <li><a href="#experience">Experience</a></li>
        <li><a href="#contact">Contact</a></li>
      </ul>
    </div>
  </nav>

  <header class="hero">
    <div class="hero-content">
      <h1 class="hero-title">{name}</h1>
      <p class="hero-description">Crafting digital experiences with modern code and design</p>
      <div class="hero-buttons">
        <a href="#projects" class="btn btn-primary">View My Work</a>
        <a href="#contact" class="btn btn-secondary">Get In Touch</a>
      </div>
    </div>
  </header>

  <main>
    <section id="about" class="section">
      <div class="container">
        <h2 class="section-title">About</h2>
        <p>Welcome to my portfolio. I'm passionate about creating exceptional work through thoughtful design and clean code.</p>
      </div>
    </section>

    <section id="projects" class="section">
      <div class="container">
        <h2 class="section-title">Featured Projects</h2>
{projects}
      </div>
    </section>

    <section id="experience" class="section">
      <div class="container">
        <div class="two-col">
          <div>
            <h2 class="section-title">Experience</h2>
{experience}
          </div>
          <div>
            <h2 class="section-title">Education</h2>
{education}
          </div>
        </div>
      </div>
    </section>

    <section id="skills" class="section">
      <div class="container">
        <h2 class="section-title">Skills &amp; Expertise</h2>
{skills}
      </div>
    </section>

    <section id="contact" class="section">
      <div class="container">
        <h2 class="section-title">Let's Connect</h2>
        <div class="contact-links">
{contact}
        </div>
      </div>
    </section>
  </main>

  <footer class="footer">
    <div class="container">
      <p>&copy; {name}. All rights reserved.</p>
    </div>
  </footer>
</body>
</html>
"##,
        name = name,
        projects = render_projects(&record.projects),
        experience = render_experience(&record.experience),
        education = render_education(&record.education),
        skills = render_skills(&record.skills),
        contact = render_contact(&record.contact),
    )
}

fn render_contact(contact: &ContactInfo) -> String {
    let mut items = Vec::new();

    if let Some(email) = &contact.email {
        items.push(format!(
            r#"          <a href="mailto:{0}" class="contact-link">✉ {0}</a>"#,
            escape_html(email)
        ));
    }
    if let Some(phone) = &contact.phone {
        items.push(format!(
            r#"          <span class="contact-link">📞 {}</span>"#,
            escape_html(phone)
        ));
    }
    if let Some(linkedin) = &contact.linkedin {
        items.push(format!(
            r#"          <a href="{}" target="_blank" rel="noopener" class="contact-link">LinkedIn</a>"#,
            escape_html(linkedin)
        ));
    }
    if let Some(github) = &contact.github {
        items.push(format!(
            r#"          <a href="{}" target="_blank" rel="noopener" class="contact-link">GitHub</a>"#,
            escape_html(github)
        ));
    }
    if let Some(website) = &contact.website {
        items.push(format!(
            r#"          <a href="{}" target="_blank" rel="noopener" class="contact-link">Website</a>"#,
            escape_html(website)
        ));
    }

    if items.is_empty() {
        return "          <p>Contact information</p>".to_string();
    }
    items.join("\n")
}

fn render_skills(skills: &[String]) -> String {
    if skills.is_empty() {
        return String::new();
    }
    let items: String = skills
        .iter()
        .map(|skill| format!("          <div class=\"skill-item\">{}</div>\n", escape_html(skill)))
        .collect();
    format!("        <div class=\"skills-grid\">\n{items}        </div>")
}

fn render_experience(experience: &[ExperienceEntry]) -> String {
    experience
        .iter()
        .map(|entry| {
            let mut block = String::from("        <div class=\"timeline-item\">\n");
            block.push_str(&format!(
                "          <h3 class=\"timeline-title\">{}</h3>\n",
                escape_html(&entry.title)
            ));
            if !entry.company.is_empty() {
                block.push_str("          <p class=\"timeline-meta\">");
                block.push_str(&escape_html(&entry.company));
                if !entry.dates.is_empty() {
                    block.push_str(" • ");
                    block.push_str(&escape_html(&entry.dates));
                }
                block.push_str("</p>\n");
            }
            if !entry.description.is_empty() {
                block.push_str("          <ul class=\"timeline-desc\">\n");
                for bullet in &entry.description {
                    block.push_str(&format!("            <li>{}</li>\n", escape_html(bullet)));
                }
                block.push_str("          </ul>\n");
            }
            block.push_str("        </div>\n");
            block
        })
        .collect()
}

fn render_education(education: &[EducationEntry]) -> String {
    education
        .iter()
        .map(|entry| {
            let mut block = String::from("        <div class=\"timeline-item\">\n");
            block.push_str(&format!(
                "          <h3 class=\"timeline-title\">{}</h3>\n",
                escape_html(&entry.degree)
            ));
            if !entry.school.is_empty() {
                block.push_str("          <p class=\"timeline-meta\">");
                block.push_str(&escape_html(&entry.school));
                if !entry.year.is_empty() {
                    block.push_str(" • ");
                    block.push_str(&escape_html(&entry.year));
                }
                block.push_str("</p>\n");
            }
            block.push_str("        </div>\n");
            block
        })
        .collect()
}

fn render_projects(projects: &[ProjectEntry]) -> String {
    if projects.is_empty() {
        return "        <p class=\"no-content\">No projects to display yet.</p>".to_string();
    }
    let cards: String = projects
        .iter()
        .map(|project| {
            let mut card = String::from("          <div class=\"project-card\">\n");
            card.push_str(&format!(
                "            <h3 class=\"project-title\">{}</h3>\n",
                escape_html(&project.name)
            ));
            if !project.description.is_empty() {
                card.push_str("            <ul class=\"project-desc\">\n");
                for bullet in &project.description {
                    card.push_str(&format!("              <li>{}</li>\n", escape_html(bullet)));
                }
                card.push_str("            </ul>\n");
            }
            card.push_str("          </div>\n");
            card
        })
        .collect();
    format!("        <div class=\"projects-grid\">\n{cards}        </div>")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
