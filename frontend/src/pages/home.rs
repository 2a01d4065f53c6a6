use chrono::Datelike;
use yew::prelude::*;

use crate::components::accordion::AccordionItem;
use crate::components::lead_form::LeadFormWidget;
use crate::components::reveal::Reveal;
use crate::components::smart_image::{Placeholder, SmartImage};
use crate::pages::content::{self, Photo};
use crate::site;

#[derive(Properties, PartialEq)]
struct SectionTitleProps {
    #[prop_or_default]
    eyebrow: Option<&'static str>,
    title: &'static str,
    #[prop_or_default]
    desc: Option<&'static str>,
}

#[function_component(SectionTitle)]
fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            if let Some(eyebrow) = props.eyebrow {
                <div class="eyebrow">{eyebrow}</div>
            }
            <h2>{props.title}</h2>
            if let Some(desc) = props.desc {
                <p class="muted">{desc}</p>
            }
        </div>
    }
}

/// Class list for a card that also carries one layout class.
fn card(variant: &'static str) -> Classes {
    classes!("card", variant)
}

fn pill(label: &str) -> Html {
    html! { <span class="pill">{label.to_string()}</span> }
}

fn photo(photo: &Photo, priority: bool, class: &'static str) -> Html {
    html! {
        <SmartImage
            src={photo.src}
            mobile_src={Some(AttrValue::from(photo.mobile_src))}
            fallback_src={Some(AttrValue::from(photo.fallback_src))}
            width={Some(photo.width)}
            height={Some(photo.height)}
            alt={photo.alt}
            {priority}
            placeholder={Placeholder::Blur { preview_src: photo.preview_src.into() }}
            class={classes!(class)}
        />
    }
}

fn hero() -> Html {
    html! {
        <section id="top" class="container hero">
            <div class="hero-grid">
                <Reveal>
                    <div class="pill-row">{ for content::HERO_PILLS.iter().map(|p| pill(p)) }</div>
                    <h1>{"Premium internal systems that make organizations run smoother."}</h1>
                    <p class="muted lead">
                        {site::COMPANY_NAME}
                        {" designs and builds secure, scalable platforms that reduce manual work, improve visibility, and support smarter decision-making across teams and branches."}
                    </p>
                    <div class="cta-row">
                        <a href="#contact" class="button-primary">{"Book a Consultation"}</a>
                        <a href="#solutions" class="button-secondary">{"View Solutions"}</a>
                    </div>
                    <div class="highlight-grid">
                        { for content::HERO_HIGHLIGHTS.iter().map(|(title, desc)| html! {
                            <div class="highlight">
                                <div class="highlight-title">{*title}</div>
                                <div class="highlight-desc">{*desc}</div>
                            </div>
                        }) }
                    </div>
                </Reveal>
                <Reveal delay_ms={120}>
                    <div class="card media-card">
                        <div class="media">
                            { photo(&content::HERO_PHOTO, true, "media-image") }
                            <div class="media-overlay" />
                            <div class="media-caption">
                                <div class="caption-title">{"Built for serious operations"}</div>
                                <div class="caption-desc">
                                    {"Ticketing systems, portals, dashboards and workflows. Premium delivery with secure foundations."}
                                </div>
                            </div>
                        </div>
                        <div class="stat-grid">
                            { for content::HERO_STATS.iter().map(|(k, v)| html! {
                                <div class="stat">
                                    <div class="stat-value">{*k}</div>
                                    <div class="stat-label">{*v}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn trust_strip() -> Html {
    html! {
        <section class="container">
            <div class="card trust-strip">
                <span class="trust-label">{"Delivery standards:"}</span>
                { for content::DELIVERY_STANDARDS.iter().map(|s| html! { <span class="trust-item">{*s}</span> }) }
            </div>
        </section>
    }
}

fn about() -> Html {
    html! {
        <section id="about" class="container section">
            <Reveal class={classes!("two-col")}>
                <SectionTitle
                    eyebrow={Some("About")}
                    title="Built for organizations that want operational clarity."
                    desc={Some("We focus on practical systems that reduce friction in daily work, turning scattered processes into clean, trackable workflows.")}
                />
                <div class="card padded">
                    <div class="eyebrow">{"Our Promise"}</div>
                    <div class="promise">{"We don’t just build software, we improve how work gets done."}</div>
                    <p class="muted">
                        {"Our solutions are designed for real teams, real constraints, and real operational needs, with security and scalability as defaults."}
                    </p>
                </div>
            </Reveal>
            <div class="three-col">
                { for content::PILLARS.iter().enumerate().map(|(i, (title, desc))| html! {
                    <Reveal delay_ms={i as u32 * 80} class={card("padded")}>
                        <div class="card-title">{*title}</div>
                        <p class="muted">{*desc}</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn services() -> Html {
    html! {
        <section id="services" class="container section">
            <SectionTitle
                eyebrow={Some("Core Services")}
                title="What we do"
                desc={Some("We build internal systems that digitize workflows, improve visibility, and scale with your organization.")}
            />
            <div class="two-col cards">
                { for content::SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <Reveal delay_ms={i as u32 * 80} class={card("padded")}>
                        <div class="service-head">
                            <div>
                                <div class="card-title large">{service.title}</div>
                                <p class="muted">{service.desc}</p>
                            </div>
                            <div class="icon-box">{service.icon}</div>
                        </div>
                        <ul class="bullets">
                            { for service.bullets.iter().map(|b| html! {
                                <li><span class="dot" /><span class="muted">{*b}</span></li>
                            }) }
                        </ul>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn solutions() -> Html {
    html! {
        <section id="solutions" class="container section">
            <div class="two-col centered">
                <div>
                    <SectionTitle
                        eyebrow={Some("Solutions")}
                        title="Systems we build"
                        desc={Some("Proven solution types that improve how organizations work day to day.")}
                    />
                    <div class="stack">
                        { for content::SOLUTIONS.iter().map(|(title, desc)| html! {
                            <Reveal class={card("tile")}>
                                <div class="tile-title">{*title}</div>
                                <div class="muted small">{*desc}</div>
                            </Reveal>
                        }) }
                    </div>
                </div>
                <Reveal class={card("media-card")}>
                    { photo(&content::ABSTRACT_PHOTO, false, "media-image") }
                    <div class="padded">
                        <div class="card-title large">{"Modern architecture. Clean delivery."}</div>
                        <p class="muted">
                            {"Clear roles, secure access, and scalable data structures, so your platform grows with your organization."}
                        </p>
                        <div class="pill-row">{ for content::SOLUTION_TAGS.iter().map(|t| pill(t)) }</div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn industries() -> Html {
    html! {
        <section id="industries" class="container section">
            <SectionTitle
                eyebrow={Some("Industries")}
                title="Who we serve"
                desc={Some("Organizations that value operational clarity and systems maturity.")}
            />
            <div class="three-col">
                { for content::INDUSTRIES.iter().enumerate().map(|(i, sector)| html! {
                    <Reveal delay_ms={(i % 3) as u32 * 80} class={card("padded")}>
                        <div class="eyebrow">{"Sector"}</div>
                        <div class="card-title">{*sector}</div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn why_us() -> Html {
    html! {
        <section class="container section">
            <Reveal class={card("why")}>
                <div class="padded">
                    <div class="eyebrow">{"Why "}{site::BRAND}</div>
                    <div class="why-title">{"Premium delivery. Practical outcomes. Secure foundations."}</div>
                    <p class="muted">{"Systems that match real workflows, run fast, and scale cleanly, with accountability built-in."}</p>
                    <div class="stack">
                        { for content::WHY_POINTS.iter().map(|(title, desc)| html! {
                            <div class="tile paper">
                                <div class="tile-title">{*title}</div>
                                <div class="muted small">{*desc}</div>
                            </div>
                        }) }
                    </div>
                </div>
                { photo(&content::OFFICE_PHOTO, false, "why-image") }
            </Reveal>
        </section>
    }
}

fn faq() -> Html {
    html! {
        <section id="faq" class="container section">
            <SectionTitle eyebrow={Some("FAQ")} title="Common questions" />
            <div class="accordion">
                { for content::FAQS.iter().map(|(question, answer)| html! {
                    <AccordionItem question={question.to_string()}>
                        <p class="muted">{*answer}</p>
                    </AccordionItem>
                }) }
            </div>
        </section>
    }
}

fn contact() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <section id="contact" class="container section last">
            <div class="card contact">
                <div class="two-col">
                    <div>
                        <div class="eyebrow">{"Contact"}</div>
                        <div class="why-title">{"Ready to modernize your operations?"}</div>
                        <p class="muted">
                            {"Book a consultation and we’ll map your workflow, define roles, and recommend the best solution path."}
                        </p>
                        <div class="cta-row">
                            <a href={site::consultation_whatsapp()} class="button-primary" target="_blank" rel="noreferrer">
                                {"WhatsApp Consultation"}
                            </a>
                            <a href={site::consultation_email()} class="button-secondary">{"Email Us"}</a>
                        </div>
                        <div class="contact-details muted small">
                            <div><span class="strong">{"Phone: "}</span>{site::PHONE_DISPLAY}</div>
                            <div><span class="strong">{"Email: "}</span>{site::EMAIL}</div>
                            <div><span class="strong">{"Location: "}</span>{site::LOCATION}</div>
                        </div>
                    </div>
                    <LeadFormWidget />
                </div>
            </div>
            <footer class="footer muted">
                {format!("© {} {}. All rights reserved.", year, site::COMPANY_NAME)}
            </footer>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <style>{HOME_STYLES}</style>
            <div class="glow" aria-hidden="true">
                <div class="glow-a" />
                <div class="glow-b" />
            </div>
            { hero() }
            { trust_strip() }
            { about() }
            { services() }
            { solutions() }
            { industries() }
            { why_us() }
            { faq() }
            { contact() }
        </main>
    }
}

const HOME_STYLES: &str = r#"
    :root {
        --ink: #0B1220;
        --muted: #5B6472;
        --line: #E9E9E4;
        --paper: #FAFAF7;
        --navy: #1E3A8A;
        --teal: #0F766E;
        --shadow-soft: 0 10px 30px rgba(11, 18, 32, 0.08);
        --shadow-card: 0 16px 60px rgba(11, 18, 32, 0.10);
    }
    body { margin: 0; background: var(--paper); color: var(--ink); font-family: Inter, system-ui, -apple-system, "Segoe UI", sans-serif; }
    a { color: inherit; text-decoration: none; }
    .container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
    .section { padding-top: 3.5rem; padding-bottom: 3.5rem; }
    .section.last { padding-bottom: 4rem; }
    .muted { color: var(--muted); line-height: 1.6; }
    .small { font-size: 0.875rem; }
    .strong { color: var(--ink); font-weight: 500; }
    .glow { pointer-events: none; position: fixed; inset: 0; z-index: -10; }
    .glow-a { position: absolute; top: -6rem; left: 50%; height: 18rem; width: 38rem; transform: translateX(-50%); border-radius: 9999px; background: linear-gradient(90deg, rgba(30,58,138,.1), rgba(15,118,110,.1), rgba(30,58,138,.1)); filter: blur(64px); }
    .glow-b { position: absolute; top: 16rem; right: -12rem; height: 18rem; width: 32rem; border-radius: 9999px; background: rgba(15,118,110,.1); filter: blur(64px); }

    .site-header { position: sticky; top: 0; z-index: 30; border-bottom: 1px solid transparent; background: rgba(250,250,247,.8); backdrop-filter: blur(8px); transition: border-color .2s, box-shadow .2s; }
    .site-header.scrolled { border-bottom-color: var(--line); box-shadow: var(--shadow-soft); }
    .header-row { display: flex; height: 4rem; align-items: center; justify-content: space-between; gap: .75rem; }
    .logo { display: flex; align-items: center; gap: .75rem; }
    .logo-mark { height: 2.5rem; width: 2.5rem; border-radius: 1rem; display: grid; place-items: center; background: linear-gradient(135deg, var(--navy), var(--teal)); color: #fff; font-weight: 600; box-shadow: var(--shadow-soft); }
    .logo-name { font-weight: 600; letter-spacing: -0.01em; }
    .logo-sub { font-size: .75rem; color: var(--muted); margin-top: -2px; }
    .desktop-nav { display: none; gap: 1.5rem; }
    .nav-link { font-size: .875rem; color: var(--muted); transition: color .2s; }
    .nav-link:hover { color: var(--ink); }
    .header-actions { display: flex; align-items: center; gap: .5rem; }
    .icon-button { height: 2.5rem; width: 2.5rem; border-radius: 1rem; border: 1px solid var(--line); background: #fff; box-shadow: var(--shadow-soft); cursor: pointer; }

    .mobile-menu { position: fixed; inset: 0; z-index: 40; pointer-events: none; }
    .mobile-menu.open { pointer-events: auto; }
    .mobile-menu-backdrop { position: absolute; inset: 0; background: rgba(11,18,32,.2); backdrop-filter: blur(4px); opacity: 0; transition: opacity .25s; }
    .mobile-menu.open .mobile-menu-backdrop { opacity: 1; }
    .mobile-menu-panel { position: absolute; right: 0; top: 0; height: 100%; width: 86%; max-width: 24rem; background: var(--paper); border-left: 1px solid var(--line); box-shadow: var(--shadow-card); transform: translateX(100%); transition: transform .3s; }
    .mobile-menu.open .mobile-menu-panel { transform: translateX(0); }
    .mobile-menu-header { display: flex; justify-content: space-between; align-items: center; padding: 1.25rem; border-bottom: 1px solid var(--line); }
    .mobile-menu-links { padding: 1.25rem; display: grid; gap: .75rem; }
    .mobile-menu-link { display: block; border-radius: 1rem; border: 1px solid var(--line); background: #fff; padding: .75rem 1rem; box-shadow: var(--shadow-soft); }

    .button-primary, .button-secondary { display: inline-flex; align-items: center; justify-content: center; border-radius: 9999px; padding: .75rem 1.25rem; font-size: .875rem; font-weight: 500; cursor: pointer; transition: opacity .2s, background .2s; border: none; }
    .button-primary { background: var(--ink); color: #fff; box-shadow: var(--shadow-card); }
    .button-primary:hover { opacity: .95; }
    .button-primary:disabled { opacity: .6; cursor: not-allowed; }
    .button-primary.small { padding: .5rem 1rem; }
    .button-primary.wide { width: 100%; margin-top: .5rem; }
    .button-secondary { border: 1px solid var(--line); background: #fff; color: var(--ink); box-shadow: var(--shadow-soft); }

    .card { border-radius: 1rem; border: 1px solid var(--line); background: #fff; box-shadow: var(--shadow-soft); }
    .card.padded, .padded { padding: 1.5rem; }
    .card-title { font-size: 1.125rem; font-weight: 600; letter-spacing: -0.01em; }
    .card-title.large { font-size: 1.25rem; }
    .eyebrow { font-size: .75rem; text-transform: uppercase; letter-spacing: .22em; color: var(--muted); }
    .section-title { max-width: 42rem; }
    .section-title h2 { margin-top: .75rem; font-size: 1.75rem; font-weight: 600; letter-spacing: -0.02em; }
    .pill-row { display: flex; flex-wrap: wrap; gap: .5rem; }
    .pill { display: inline-flex; border-radius: 9999px; border: 1px solid var(--line); background: rgba(255,255,255,.8); padding: .25rem .75rem; font-size: .8rem; box-shadow: 0 1px 2px rgba(0,0,0,.05); }

    .hero { padding-top: 2.5rem; padding-bottom: 2.5rem; }
    .hero h1 { margin-top: 1.25rem; font-size: 2rem; font-weight: 600; letter-spacing: -0.02em; }
    .hero-grid, .two-col { display: grid; gap: 2rem; }
    .two-col.cards { margin-top: 2rem; gap: 1rem; }
    .two-col.centered { align-items: center; }
    .three-col { margin-top: 2.5rem; display: grid; gap: 1rem; }
    .cta-row { margin-top: 1.5rem; display: flex; flex-wrap: wrap; gap: .75rem; }
    .highlight-grid { margin-top: 1.75rem; display: grid; gap: .75rem; font-size: .875rem; }
    .highlight, .tile { border-radius: 1rem; border: 1px solid var(--line); background: rgba(255,255,255,.75); padding: 1rem; box-shadow: var(--shadow-soft); }
    .tile.paper { background: var(--paper); box-shadow: none; }
    .highlight-title, .tile-title { font-weight: 500; }
    .highlight-desc { margin-top: .25rem; font-size: .75rem; color: var(--muted); }
    .stack { margin-top: 1.5rem; display: grid; gap: .75rem; }
    .media-card { overflow: hidden; }
    .media { position: relative; }
    .media-overlay { position: absolute; inset: 0; background: linear-gradient(to top, rgba(11,18,32,.55), rgba(11,18,32,.1), transparent); }
    .media-caption { position: absolute; bottom: 1rem; left: 1rem; right: 1rem; border-radius: 1rem; background: rgba(255,255,255,.92); border: 1px solid var(--line); padding: 1rem; }
    .caption-title { font-size: .875rem; font-weight: 500; }
    .caption-desc { margin-top: .25rem; font-size: .75rem; color: var(--muted); }
    .stat-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: .75rem; padding: 1.25rem; }
    .stat { border-radius: 1rem; border: 1px solid var(--line); background: var(--paper); padding: 1rem; }
    .stat-value { font-weight: 600; }
    .stat-label { font-size: .7rem; color: var(--muted); }
    .trust-strip { display: flex; flex-wrap: wrap; align-items: center; gap: .5rem .75rem; padding: 1rem 1.25rem; font-size: .8rem; color: var(--muted); }
    .trust-label { font-weight: 500; color: var(--ink); }
    .promise { margin-top: .75rem; font-size: 1.25rem; font-weight: 600; }
    .service-head { display: flex; justify-content: space-between; gap: .75rem; align-items: flex-start; }
    .icon-box { height: 2.5rem; width: 2.5rem; flex: none; border-radius: 1rem; border: 1px solid var(--line); background: var(--paper); display: grid; place-items: center; }
    .bullets { margin: 1rem 0 0; padding: 0; list-style: none; display: grid; gap: .5rem; font-size: .875rem; }
    .bullets li { display: flex; align-items: center; gap: .5rem; }
    .dot { height: 6px; width: 6px; border-radius: 9999px; background: var(--teal); }
    .why { display: grid; overflow: hidden; box-shadow: var(--shadow-card); }
    .why-title { margin-top: .75rem; font-size: 1.6rem; font-weight: 600; letter-spacing: -0.02em; }
    .contact { padding: 1.75rem; background: linear-gradient(135deg, #fff, var(--paper), #fff); box-shadow: var(--shadow-card); }
    .contact-details { margin-top: 1.5rem; display: grid; gap: .25rem; }
    .footer { margin-top: 2.5rem; text-align: center; font-size: .75rem; }

    .accordion { margin-top: 2rem; display: grid; gap: .75rem; }
    .accordion-item { border-radius: 1rem; border: 1px solid var(--line); background: #fff; box-shadow: var(--shadow-soft); overflow: hidden; }
    .accordion-question { width: 100%; display: flex; justify-content: space-between; align-items: center; gap: 1rem; padding: 1rem 1.25rem; background: none; border: none; font: inherit; font-weight: 500; text-align: left; cursor: pointer; color: var(--ink); }
    .accordion-answer { max-height: 0; overflow: hidden; padding: 0 1.25rem; transition: max-height .3s ease, padding .3s ease; }
    .accordion-item.open .accordion-answer { max-height: 20rem; padding-bottom: 1rem; }
    .toggle-icon { font-size: 1.25rem; color: var(--muted); }

    .lead-form { padding: 1.5rem; }
    .lead-form-title { font-size: .875rem; font-weight: 500; }
    .lead-form-hint { margin-top: .5rem; font-size: .875rem; color: var(--muted); }
    .lead-form-fields { margin-top: 1rem; display: grid; gap: .75rem; }
    .field { width: 100%; box-sizing: border-box; border-radius: 1rem; border: 1px solid var(--line); background: #fff; padding: .75rem 1rem; font: inherit; font-size: .875rem; outline: none; }
    .field:focus { box-shadow: 0 0 0 2px rgba(15,118,110,.3); }
    .form-status { border-radius: 1rem; border: 1px solid; padding: .75rem 1rem; font-size: .875rem; }
    .form-status.success { border-color: rgba(15,118,110,.3); background: rgba(15,118,110,.1); }
    .form-status.error { border-color: #fecaca; background: #fef2f2; }

    .smart-image { position: relative; overflow: hidden; background: var(--paper); }
    .smart-image-asset { display: block; width: 100%; height: 100%; object-fit: cover; opacity: 0; transition: opacity .5s ease; }
    .smart-image-asset.loaded { opacity: 1; }
    .smart-image-pulse { position: absolute; inset: 0; background: var(--line); animation: pulse 1.5s ease-in-out infinite; transition: opacity .3s; }
    .smart-image-preview { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; filter: blur(20px); transform: scale(1.1); transition: opacity .5s; }
    .smart-image-pulse.hidden, .smart-image-preview.hidden { opacity: 0; }
    .media-image { height: 16rem; }
    .why-image { min-height: 20rem; }
    @keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: .5; } }

    .reveal { opacity: 0; transform: translateY(16px); transition: opacity .6s ease, transform .6s ease; }
    .reveal.visible { opacity: 1; transform: none; }
    @media (prefers-reduced-motion: reduce) { .reveal { opacity: 1; transform: none; transition: none; } }

    @media (min-width: 640px) {
        .hero h1 { font-size: 2.5rem; }
        .highlight-grid { grid-template-columns: repeat(2, 1fr); }
        .contact { padding: 2.5rem; }
    }
    @media (min-width: 768px) {
        .desktop-nav { display: flex; }
        .burger { display: none; }
        .hero-grid, .two-col, .why { grid-template-columns: repeat(2, 1fr); align-items: start; }
        .three-col { grid-template-columns: repeat(3, 1fr); }
        .media-image { height: 18rem; }
    }
    @media (max-width: 639px) { .hide-mobile { display: none; } }
"#;
