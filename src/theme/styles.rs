//! Global CSS styles for ShoePro Store.
//!
//! Black and white base with a yellow accent. Class names follow a
//! block__element convention per component.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Base */
  --background: #ffffff;
  --foreground: #0f0f0f;
  --surface: #f7f7f8;
  --border: #e4e4e7;

  /* Brand */
  --accent: #facc15;
  --accent-hover: #eab308;
  --accent-soft: rgba(250, 204, 21, 0.12);
  --hero-from: #0f0f0f;
  --hero-to: #3f3f46;

  /* Text */
  --text-muted: #71717a;
  --text-soft: #a1a1aa;
  --text-inverted: #fafafa;

  /* Semantic */
  --sale: #dc2626;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-4xl: 2.25rem;
  --text-6xl: 3.75rem;

  --radius: 0.75rem;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
  --transition: 200ms ease;
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  color: var(--foreground);
  background: var(--background);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}

.container {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 2rem;
}

.w-full {
  width: 100%;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border: 1px solid transparent;
  border-radius: 0.5rem;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition), color var(--transition), border-color var(--transition);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-default { background: var(--foreground); color: var(--text-inverted); }
.btn-default:hover { background: #27272a; }
.btn-outline { background: transparent; border-color: var(--border); color: var(--foreground); }
.btn-outline:hover { background: var(--accent); border-color: var(--accent); color: #000; }
.btn-ghost { background: transparent; color: inherit; }
.btn-ghost:hover { background: var(--surface); }
.btn-accent { background: var(--accent); color: #000; }
.btn-accent:hover { background: var(--accent-hover); }

.btn-sm { padding: 0.375rem 0.75rem; font-size: var(--text-sm); }
.btn-md { padding: 0.625rem 1.25rem; font-size: var(--text-base); }
.btn-lg { padding: 1rem 2rem; font-size: var(--text-lg); }
.btn-icon { position: relative; width: 2.5rem; height: 2.5rem; padding: 0; }

/* === Inputs === */
.input {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  font: inherit;
  background: var(--background);
  color: inherit;
}

.input:focus {
  outline: 2px solid var(--accent);
  outline-offset: 1px;
}

.search-input-wrapper {
  position: relative;
}

.search-icon {
  position: absolute;
  left: 1rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--text-soft);
  display: flex;
}

.search-input {
  padding-left: 3rem;
}

/* === Cards and badges === */
.card {
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
}

.card-content {
  height: 100%;
}

.badge {
  display: inline-flex;
  align-items: center;
  padding: 0.125rem 0.625rem;
  border-radius: 999px;
  font-size: 0.75rem;
  font-weight: 700;
}

.badge-accent { background: var(--accent); color: #000; }
.badge-sale { background: var(--sale); color: #fff; }
.badge-counter {
  position: absolute;
  top: -0.25rem;
  right: -0.25rem;
  min-width: 1.25rem;
  height: 1.25rem;
  justify-content: center;
  padding: 0 0.3rem;
  background: var(--accent);
  color: #000;
  font-size: 0.7rem;
}

.icon {
  flex-shrink: 0;
}

/* === Page frame === */
.page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.page-main { flex: 1; }
.page-main--full { width: 100%; }
.page-main--centered { max-width: 48rem; width: 100%; margin: 0 auto; padding: 3rem 2rem; }

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  background: rgba(255, 255, 255, 0.95);
  border-bottom: 1px solid var(--border);
  backdrop-filter: blur(8px);
}

.site-header__bar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 4rem;
}

.site-header__nav {
  display: flex;
  gap: 2rem;
}

.site-header__link {
  font-weight: 500;
  color: var(--text-muted);
  transition: color var(--transition);
}

.site-header__link:hover,
.site-header__link.active {
  color: var(--foreground);
}

.site-header__actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.site-header__menu-toggle {
  display: none;
}

.site-header__title {
  padding: 2rem 0 1.5rem;
}

.page-title {
  font-size: var(--text-4xl);
  font-weight: 800;
}

.mobile-menu {
  display: flex;
  flex-direction: column;
  padding: 1rem 0;
  border-top: 1px solid var(--border);
}

.mobile-menu__link {
  padding: 0.75rem 0;
  font-weight: 500;
}

.brand-logo {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-xl);
  font-weight: 800;
}

.brand-logo__mark {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border-radius: 0.5rem;
  background: var(--accent);
  color: #000;
}

.brand-logo__accent { color: var(--accent-hover); }
.brand-logo.inverted { color: var(--text-inverted); }

/* === Footer === */
.site-footer {
  background: var(--foreground);
  color: var(--text-inverted);
  padding: 4rem 0 2rem;
}

.site-footer__grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: 3rem;
}

.site-footer__blurb {
  margin: 1rem 0 1.5rem;
  color: var(--text-soft);
  max-width: 28rem;
}

.site-footer__heading {
  font-size: var(--text-lg);
  font-weight: 700;
  margin-bottom: 1rem;
}

.site-footer__column {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.site-footer__link,
.site-footer__legal-link {
  color: var(--text-soft);
  transition: color var(--transition);
}

.site-footer__link:hover,
.site-footer__legal-link:hover {
  color: var(--accent);
}

.site-footer__bottom {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-top: 3rem;
  padding-top: 2rem;
  border-top: 1px solid #27272a;
  font-size: var(--text-sm);
  color: var(--text-soft);
}

.site-footer__legal {
  display: flex;
  gap: 1.5rem;
}

.social-links {
  display: flex;
  gap: 1rem;
}

.social-links__item {
  color: var(--text-soft);
  transition: color var(--transition);
}

.social-links__item:hover {
  color: var(--accent);
}

/* === Hero === */
.gradient-hero {
  background: linear-gradient(135deg, var(--hero-from), var(--hero-to));
  color: var(--text-inverted);
}

.gradient-accent-text {
  background: linear-gradient(90deg, var(--accent), #fb923c);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero {
  position: relative;
  overflow: hidden;
  padding: 5rem 0;
}

.hero__shade {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.2);
}

.hero__inner {
  position: relative;
  z-index: 1;
  text-align: center;
}

.hero__title {
  font-size: var(--text-6xl);
  font-weight: 800;
  line-height: 1.1;
  margin-bottom: 1.5rem;
}

.hero__title-accent {
  display: block;
}

.hero__lead {
  font-size: var(--text-xl);
  color: #e4e4e7;
  max-width: 48rem;
  margin: 0 auto 2rem;
}

.hero__search {
  max-width: 32rem;
  margin: 0 auto 2rem;
}

.hero__search-input {
  height: 3.5rem;
  font-size: var(--text-lg);
  background: rgba(255, 255, 255, 0.1);
  border-color: rgba(255, 255, 255, 0.2);
  color: var(--text-inverted);
}

.hero__search-input::placeholder {
  color: #d4d4d8;
}

.hero__glow {
  position: absolute;
  border-radius: 50%;
  background: var(--accent);
}

.hero__glow--top { top: 5rem; left: 2.5rem; width: 5rem; height: 5rem; opacity: 0.2; filter: blur(24px); }
.hero__glow--bottom { bottom: 5rem; right: 2.5rem; width: 8rem; height: 8rem; opacity: 0.1; filter: blur(40px); }

/* === Features === */
.features {
  padding: 4rem 0;
  background: var(--surface);
}

.features__grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
}

.feature {
  text-align: center;
  padding: 1.5rem;
  background: var(--background);
  border-radius: var(--radius);
}

.feature__icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1rem;
  border-radius: 50%;
  background: var(--accent-soft);
  color: var(--accent-hover);
}

.feature__title {
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.feature__text {
  color: var(--text-muted);
}

/* === Sections === */
.collections-section,
.products-section {
  padding: 4rem 0;
}

.products-section {
  background: var(--surface);
}

.section-heading {
  text-align: center;
  margin-bottom: 3rem;
}

.section-heading__title {
  font-size: var(--text-4xl);
  font-weight: 800;
  margin-bottom: 0.5rem;
}

.section-heading__subtitle {
  font-size: var(--text-xl);
  color: var(--text-muted);
}

.products-section__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 3rem;
}

.collections-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
}

.products-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 2rem;
}

.product-skeleton {
  height: 24rem;
  border-radius: var(--radius);
  background: var(--background);
}

.collection-skeleton {
  height: 20rem;
  border-radius: var(--radius);
  background: var(--surface);
}

.empty-state {
  text-align: center;
  padding: 4rem 0;
}

.empty-state__icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 6rem;
  height: 6rem;
  margin: 0 auto 1rem;
  border-radius: 50%;
  background: var(--border);
  color: var(--text-soft);
}

.empty-state__title {
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--text-muted);
  margin-bottom: 0.5rem;
}

.empty-state__hint {
  color: var(--text-soft);
  margin-bottom: 1.5rem;
}

.not-found__code {
  font-size: 6rem;
  font-weight: 800;
  color: var(--accent);
}

/* === Collection card === */
.collection-card__media {
  position: relative;
  aspect-ratio: 4 / 3;
  overflow: hidden;
  background: var(--surface);
}

.collection-card__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 500ms ease;
}

.collection-card:hover .collection-card__img {
  transform: scale(1.05);
}

.collection-card__placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--text-soft);
}

.collection-card__overlay {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.4), transparent);
}

.collection-card__badge {
  position: absolute;
  top: 1rem;
  left: 1rem;
}

.collection-card__body {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem;
}

.collection-card__title {
  font-size: var(--text-xl);
  font-weight: 700;
}

.collection-card__description {
  color: var(--text-muted);
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.collection-card__arrow {
  transition: transform var(--transition);
}

.collection-card__button:hover .collection-card__arrow {
  transform: translateX(4px);
}

/* === Product card === */
.product-card__media {
  position: relative;
  aspect-ratio: 1;
  background: var(--surface);
}

.product-card__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.product-card__placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
  padding: 1rem;
  text-align: center;
  color: var(--text-soft);
  font-weight: 600;
}

.product-card__badge {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
}

.product-card__body {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1rem;
}

.product-card__title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.product-card__description {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.product-card__prices {
  display: flex;
  align-items: baseline;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
}

.product-card__price {
  font-size: var(--text-xl);
  font-weight: 700;
}

.product-card__compare {
  color: var(--text-soft);
  text-decoration: line-through;
}

/* === Floating cart === */
.header-cart {
  position: relative;
}

.floating-cart__backdrop {
  position: fixed;
  inset: 0;
  z-index: 50;
  background: rgba(0, 0, 0, 0.4);
}

.floating-cart {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  z-index: 51;
  display: flex;
  flex-direction: column;
  width: 26rem;
  max-width: 100vw;
  background: var(--background);
  box-shadow: var(--shadow);
  animation: slide-in 250ms ease-out;
}

.floating-cart__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 1.5rem;
  border-bottom: 1px solid var(--border);
}

.floating-cart__title {
  font-size: var(--text-xl);
  font-weight: 700;
}

.floating-cart__empty {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  color: var(--text-muted);
}

.floating-cart__items {
  flex: 1;
  overflow-y: auto;
  list-style: none;
  padding: 1rem 1.5rem;
}

.floating-cart__footer {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.5rem;
  border-top: 1px solid var(--border);
}

.floating-cart__hint {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.floating-cart__subtotal {
  display: flex;
  justify-content: space-between;
  font-weight: 600;
}

.floating-cart__amount {
  font-size: var(--text-xl);
}

.cart-line {
  display: flex;
  gap: 1rem;
  padding: 1rem 0;
  border-bottom: 1px solid var(--border);
}

.cart-line__media {
  width: 4.5rem;
  height: 4.5rem;
  flex-shrink: 0;
  border-radius: 0.5rem;
  overflow: hidden;
  background: var(--surface);
}

.cart-line__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.cart-line__placeholder {
  width: 100%;
  height: 100%;
}

.cart-line__info {
  flex: 1;
}

.cart-line__title {
  font-weight: 600;
}

.cart-line__price {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.cart-line__stepper {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  margin-top: 0.5rem;
}

.cart-line__qty {
  min-width: 1.5rem;
  text-align: center;
  font-weight: 600;
}

.cart-line__side {
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  justify-content: space-between;
}

.cart-line__total {
  font-weight: 700;
}

.cart-line__remove {
  color: var(--text-soft);
}

.cart-line__remove:hover {
  color: var(--sale);
}

/* === Newsletter === */
.newsletter {
  padding: 4rem 0;
}

.newsletter__inner {
  max-width: 56rem;
  text-align: center;
}

.newsletter__title {
  font-size: 1.875rem;
  font-weight: 800;
  margin-bottom: 1rem;
}

.newsletter__lead {
  font-size: var(--text-xl);
  color: #e4e4e7;
  margin-bottom: 2rem;
}

.newsletter__form {
  display: flex;
  gap: 1rem;
  max-width: 28rem;
  margin: 0 auto;
}

.newsletter__input {
  flex: 1;
  background: rgba(255, 255, 255, 0.1);
  border-color: rgba(255, 255, 255, 0.2);
  color: var(--text-inverted);
}

/* === Info pages === */
.info-page {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  font-size: var(--text-lg);
}

.info-page h2 {
  margin-top: 1rem;
  font-size: var(--text-2xl);
}

.info-page ul {
  padding-left: 1.25rem;
}

.info-highlight {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem 1.25rem;
  border-radius: var(--radius);
  background: var(--accent-soft);
}

.contact-list {
  list-style: none;
  padding-left: 0 !important;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.contact-form__message {
  resize: vertical;
}

.blog-list {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.blog-post .card-content {
  padding: 1.5rem;
}

.blog-post__date {
  font-size: var(--text-sm);
  color: var(--text-soft);
}

.blog-post__title {
  margin: 0.25rem 0 0.5rem;
}

.size-table {
  width: 100%;
  border-collapse: collapse;
}

.size-table th,
.size-table td {
  padding: 0.5rem 1rem;
  border-bottom: 1px solid var(--border);
  text-align: center;
}

.size-table th {
  background: var(--surface);
}

/* === Motion === */
.hover-lift {
  transition: transform var(--transition), box-shadow var(--transition);
}

.hover-lift:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow);
}

@keyframes fade-in-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes scale-in {
  from { opacity: 0; transform: scale(0.95); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes pulse {
  50% { opacity: 0.5; }
}

@keyframes slide-in {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}

.animate-fade-in-up { animation: fade-in-up 600ms ease-out both; }
.animate-scale-in { animation: scale-in 400ms ease-out both; }
.animate-pulse { animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite; }

/* === Responsive === */
@media (max-width: 1024px) {
  .products-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 768px) {
  .site-header__nav { display: none; }
  .site-header__menu-toggle { display: inline-flex; }
  .hero__title { font-size: 3rem; }
  .features__grid,
  .collections-grid,
  .products-grid,
  .site-footer__grid { grid-template-columns: 1fr; }
  .products-section__header { flex-direction: column; align-items: flex-start; gap: 1rem; }
  .newsletter__form { flex-direction: column; }
  .site-footer__bottom { flex-direction: column; gap: 1rem; }
}
"#;
