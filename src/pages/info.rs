//! Informational pages linked from the header and footer.

use dioxus::prelude::*;
use shoepro_core::format_price;
use shoepro_ui::{Button, Card, CardContent, Icon, IconKind, Input};

use crate::components::STORE_NAME;
use crate::context::use_store_config;
use crate::templates::{EcommerceTemplate, PageLayout};

/// Centered text page with a title in the header
#[component]
fn InfoPage(title: String, children: Element) -> Element {
    rsx! {
        EcommerceTemplate { page_title: title, layout: PageLayout::Centered,
            article { class: "info-page", {children} }
        }
    }
}

/// One row of the size guide
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SizeRow {
    pub eu: u8,
    pub us_men: f32,
    pub us_women: f32,
    /// Foot length
    pub cm: f32,
}

/// EU 35 to 46 with US and foot length equivalents
pub fn size_chart() -> Vec<SizeRow> {
    (35u8..=46)
        .map(|eu| {
            let step = f32::from(eu - 35);
            SizeRow {
                eu,
                us_men: 3.5 + step * 0.75 + if eu >= 40 { 0.25 } else { 0.0 },
                us_women: 5.0 + step * 0.75 + if eu >= 40 { 0.25 } else { 0.0 },
                cm: 22.5 + step * (2.0 / 3.0),
            }
        })
        .collect()
}

struct BlogPost {
    title: &'static str,
    date: &'static str,
    summary: &'static str,
}

static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "Cómo elegir zapatillas para correr",
        date: "12 de marzo",
        summary: "Pisada, amortiguación y drop: lo que tienes que mirar antes de tu próxima compra.",
    },
    BlogPost {
        title: "Cuidado del cuero en invierno",
        date: "28 de febrero",
        summary: "Limpieza, hidratación y secado para que tus botas duren varias temporadas.",
    },
    BlogPost {
        title: "Tendencias de calzado casual",
        date: "5 de febrero",
        summary: "Suelas gruesas, tonos tierra y materiales reciclados marcan el año.",
    },
];

#[component]
pub fn Blog() -> Element {
    rsx! {
        InfoPage { title: "Blog",
            div { class: "blog-list",
                for post in BLOG_POSTS.iter() {
                    Card { key: "{post.title}", class: "blog-post".to_string(),
                        CardContent {
                            p { class: "blog-post__date", "{post.date}" }
                            h2 { class: "blog-post__title", "{post.title}" }
                            p { class: "blog-post__summary", "{post.summary}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contacto() -> Element {
    rsx! {
        InfoPage { title: "Contacto",
            p { "¿Tienes dudas sobre un pedido o un producto? Escríbenos y te respondemos en menos de 24 horas hábiles." }
            ul { class: "contact-list",
                li { strong { "Email: " } "hola@shoepro.store" }
                li { strong { "WhatsApp: " } "+57 300 000 0000" }
                li { strong { "Horario: " } "Lunes a sábado, 9:00 a 18:00" }
            }
            div { class: "contact-form",
                Input { placeholder: "Tu nombre".to_string(), aria_label: "Tu nombre".to_string() }
                Input {
                    input_type: "email".to_string(),
                    placeholder: "Tu email".to_string(),
                    aria_label: "Tu email".to_string(),
                }
                textarea { class: "input contact-form__message", placeholder: "Tu mensaje", rows: "5" }
                Button { "Enviar mensaje" }
            }
        }
    }
}

#[component]
pub fn Envios() -> Element {
    let config = use_store_config();
    let threshold = format_price(config.free_shipping_threshold, &config.currency_symbol);

    rsx! {
        InfoPage { title: "Envíos",
            div { class: "info-highlight",
                Icon { kind: IconKind::Truck, size: 24 }
                p { "Envío gratis en compras superiores a {threshold}." }
            }
            h2 { "Tiempos de entrega" }
            ul {
                li { "Ciudades principales: 2 a 4 días hábiles." }
                li { "Resto del país: 4 a 7 días hábiles." }
            }
            h2 { "Seguimiento" }
            p { "Al despachar tu pedido recibirás un correo con el número de guía para seguirlo." }
        }
    }
}

#[component]
pub fn Devoluciones() -> Element {
    rsx! {
        InfoPage { title: "Devoluciones",
            div { class: "info-highlight",
                Icon { kind: IconKind::RefreshCw, size: 24 }
                p { "Tienes 30 días desde la entrega para cambiar o devolver tu compra." }
            }
            h2 { "Condiciones" }
            ul {
                li { "El producto debe estar sin uso y en su caja original." }
                li { "Los productos en oferta solo admiten cambio de talla." }
            }
            h2 { "Cómo solicitarla" }
            p { "Escríbenos desde la página de contacto con tu número de pedido y te enviaremos la guía de retorno." }
        }
    }
}

#[component]
pub fn Tallas() -> Element {
    let chart = size_chart();

    rsx! {
        InfoPage { title: "Guía de Tallas",
            p { "Mide tu pie desde el talón hasta el dedo más largo y busca la longitud en la tabla." }
            table { class: "size-table",
                thead {
                    tr {
                        th { "EU" }
                        th { "US Hombre" }
                        th { "US Mujer" }
                        th { "Largo (cm)" }
                    }
                }
                tbody {
                    for row in chart {
                        tr { key: "{row.eu}",
                            td { "{row.eu}" }
                            td { "{row.us_men}" }
                            td { "{row.us_women}" }
                            td { {format!("{:.1}", row.cm)} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Privacidad() -> Element {
    rsx! {
        InfoPage { title: "Política de Privacidad",
            p { "{STORE_NAME} usa tus datos solo para procesar pedidos y, si te suscribes, enviarte novedades." }
            p { "No vendemos ni compartimos tu información con terceros fuera de los operadores logísticos y de pago." }
            p { "Puedes pedir la eliminación de tus datos escribiendo desde la página de contacto." }
        }
    }
}

#[component]
pub fn Terminos() -> Element {
    rsx! {
        InfoPage { title: "Términos y Condiciones",
            p { "Los precios incluyen impuestos y pueden cambiar sin previo aviso." }
            p { "Las ofertas son válidas hasta agotar existencias." }
            p { "Al comprar en {STORE_NAME} aceptas las políticas de envío y devoluciones publicadas en este sitio." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_chart_covers_eu_35_to_46() {
        let chart = size_chart();
        assert_eq!(chart.len(), 12);
        assert_eq!(chart.first().map(|r| r.eu), Some(35));
        assert_eq!(chart.last().map(|r| r.eu), Some(46));
    }

    #[test]
    fn size_chart_grows_monotonically() {
        let chart = size_chart();
        for pair in chart.windows(2) {
            assert!(pair[1].cm > pair[0].cm);
            assert!(pair[1].us_men > pair[0].us_men);
            assert!(pair[1].us_women > pair[0].us_women);
        }
    }

    #[test]
    fn womens_sizes_run_one_and_a_half_above_mens() {
        for row in size_chart() {
            assert!((row.us_women - row.us_men - 1.5).abs() < f32::EPSILON);
        }
    }
}
