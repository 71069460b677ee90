// src/geos.rs
//! Static city table backing the city pages and every SEO combination route.

use serde::Serialize;

/// One Venezuelan city with its state and URL slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityEntry {
    pub display_name: &'static str,
    pub region: &'static str,
    pub url_slug: &'static str,
}

const fn city(display_name: &'static str, region: &'static str, url_slug: &'static str) -> CityEntry {
    CityEntry {
        display_name,
        region,
        url_slug,
    }
}

// Slugs are hand-picked: cities sharing a name get a region suffix
// (e.g. "santa-rita" vs "santa-rita-aragua").
pub static VENEZUELAN_CITIES: &[CityEntry] = &[
    // Distrito Capital
    city("Caracas", "Distrito Capital", "caracas"),

    // Zulia
    city("Maracaibo", "Zulia", "maracaibo"),
    city("San Francisco", "Zulia", "san-francisco-zulia"),
    city("Cabimas", "Zulia", "cabimas"),
    city("Ciudad Ojeda", "Zulia", "ciudad-ojeda"),
    city("Lagunillas", "Zulia", "lagunillas"),
    city("Santa Rita", "Zulia", "santa-rita"),
    city("Machiques", "Zulia", "machiques"),
    city("Los Puertos de Altagracia", "Zulia", "los-puertos-altagracia"),
    city("Villa del Rosario", "Zulia", "villa-del-rosario"),

    // Miranda
    city("Los Teques", "Miranda", "los-teques"),
    city("Guarenas", "Miranda", "guarenas"),
    city("Guatire", "Miranda", "guatire"),
    city("Petare", "Miranda", "petare"),
    city("Baruta", "Miranda", "baruta"),
    city("El Hatillo", "Miranda", "el-hatillo"),
    city("Chacao", "Miranda", "chacao"),
    city("Santa Teresa del Tuy", "Miranda", "santa-teresa-tuy"),
    city("Cúa", "Miranda", "cua"),
    city("Charallave", "Miranda", "charallave"),

    // Carabobo
    city("Valencia", "Carabobo", "valencia"),
    city("Puerto Cabello", "Carabobo", "puerto-cabello"),
    city("San Diego", "Carabobo", "san-diego-carabobo"),
    city("Los Guayos", "Carabobo", "los-guayos"),
    city("Naguanagua", "Carabobo", "naguanagua"),
    city("San Joaquín", "Carabobo", "san-joaquin"),
    city("Tocuyito", "Carabobo", "tocuyito"),
    city("Guacara", "Carabobo", "guacara"),
    city("Morón", "Carabobo", "moron"),

    // Aragua
    city("Maracay", "Aragua", "maracay"),
    city("La Victoria", "Aragua", "la-victoria"),
    city("Turmero", "Aragua", "turmero"),
    city("Villa de Cura", "Aragua", "villa-de-cura"),
    city("Santa Rita", "Aragua", "santa-rita-aragua"),
    city("El Limón", "Aragua", "el-limon"),
    city("Cagua", "Aragua", "cagua"),
    city("Palo Negro", "Aragua", "palo-negro"),

    // Lara
    city("Barquisimeto", "Lara", "barquisimeto"),
    city("Cabudare", "Lara", "cabudare"),
    city("El Tocuyo", "Lara", "el-tocuyo"),
    city("Quíbor", "Lara", "quibor"),
    city("Carora", "Lara", "carora"),
    city("Duaca", "Lara", "duaca"),
    city("Sarare", "Lara", "sarare"),

    // Anzoátegui
    city("Barcelona", "Anzoátegui", "barcelona-anzoategui"),
    city("Puerto La Cruz", "Anzoátegui", "puerto-la-cruz"),
    city("El Tigre", "Anzoátegui", "el-tigre"),
    city("Anaco", "Anzoátegui", "anaco"),
    city("Cantaura", "Anzoátegui", "cantaura"),
    city("Pariaguán", "Anzoátegui", "pariaguan"),
    city("Soledad", "Anzoátegui", "soledad"),
    city("Lechería", "Anzoátegui", "lecheria"),

    // Bolívar
    city("Ciudad Bolívar", "Bolívar", "ciudad-bolivar"),
    city("Puerto Ordaz", "Bolívar", "puerto-ordaz"),
    city("San Félix", "Bolívar", "san-felix"),
    city("Ciudad Guayana", "Bolívar", "ciudad-guayana"),
    city("El Callao", "Bolívar", "el-callao"),
    city("Upata", "Bolívar", "upata"),
    city("Caicara del Orinoco", "Bolívar", "caicara-orinoco"),
    city("Tumeremo", "Bolívar", "tumeremo"),

    // Táchira
    city("San Cristóbal", "Táchira", "san-cristobal"),
    city("Táriba", "Táchira", "tariba"),
    city("La Grita", "Táchira", "la-grita"),
    city("Rubio", "Táchira", "rubio"),
    city("San Antonio del Táchira", "Táchira", "san-antonio-tachira"),
    city("Ureña", "Táchira", "urena"),
    city("Colón", "Táchira", "colon-tachira"),
    city("La Fría", "Táchira", "la-fria"),

    // Mérida
    city("Mérida", "Mérida", "merida"),
    city("Ejido", "Mérida", "ejido"),
    city("El Vigía", "Mérida", "el-vigia"),
    city("Tovar", "Mérida", "tovar"),
    city("Santa Cruz de Mora", "Mérida", "santa-cruz-mora"),
    city("Mucuchíes", "Mérida", "mucuchies"),

    // Falcón
    city("Coro", "Falcón", "coro"),
    city("Punto Fijo", "Falcón", "punto-fijo"),
    city("Judibana", "Falcón", "judibana"),
    city("Los Taques", "Falcón", "los-taques"),
    city("Churuguara", "Falcón", "churuguara"),
    city("Dabajuro", "Falcón", "dabajuro"),
    city("Santa Ana de Coro", "Falcón", "santa-ana-coro"),

    // Monagas
    city("Maturín", "Monagas", "maturin"),
    city("Temblador", "Monagas", "temblador"),
    city("Punta de Mata", "Monagas", "punta-mata"),
    city("Barrancas", "Monagas", "barrancas"),
    city("Caripito", "Monagas", "caripito"),
    city("Caripe", "Monagas", "caripe"),

    // Sucre
    city("Cumaná", "Sucre", "cumana"),
    city("Carúpano", "Sucre", "carupano"),
    city("Güiria", "Sucre", "guiria"),
    city("Araya", "Sucre", "araya"),
    city("Casanay", "Sucre", "casanay"),
    city("Cariaco", "Sucre", "cariaco"),

    // Nueva Esparta
    city("La Asunción", "Nueva Esparta", "la-asuncion"),
    city("Porlamar", "Nueva Esparta", "porlamar"),
    city("Pampatar", "Nueva Esparta", "pampatar"),
    city("Juan Griego", "Nueva Esparta", "juan-griego"),
    city("El Valle del Espíritu Santo", "Nueva Esparta", "el-valle-espiritu-santo"),

    // Portuguesa
    city("Acarigua", "Portuguesa", "acarigua"),
    city("Araure", "Portuguesa", "araure"),
    city("Guanare", "Portuguesa", "guanare"),
    city("Biscucuy", "Portuguesa", "biscucuy"),
    city("Turén", "Portuguesa", "turen"),
    city("Villa Bruzual", "Portuguesa", "villa-bruzual"),

    // Barinas
    city("Barinas", "Barinas", "barinas"),
    city("Barinitas", "Barinas", "barinitas"),
    city("Santa Bárbara", "Barinas", "santa-barbara-barinas"),
    city("Ciudad Bolivia", "Barinas", "ciudad-bolivia"),
    city("Sabaneta", "Barinas", "sabaneta"),
    city("Socopó", "Barinas", "socopo"),

    // Apure
    city("San Fernando de Apure", "Apure", "san-fernando-apure"),
    city("Achaguas", "Apure", "achaguas"),
    city("Biruaca", "Apure", "biruaca"),
    city("Elorza", "Apure", "elorza"),
    city("Guasdualito", "Apure", "guasdualito"),

    // Guárico
    city("San Juan de los Morros", "Guárico", "san-juan-morros"),
    city("Valle de la Pascua", "Guárico", "valle-pascua"),
    city("Zaraza", "Guárico", "zaraza"),
    city("Calabozo", "Guárico", "calabozo"),
    city("Altagracia de Orituco", "Guárico", "altagracia-orituco"),
    city("Santa María de Ipire", "Guárico", "santa-maria-ipire"),

    // Cojedes
    city("San Carlos", "Cojedes", "san-carlos-cojedes"),
    city("Tinaquillo", "Cojedes", "tinaquillo"),
    city("El Baúl", "Cojedes", "el-baul"),
    city("Tinaco", "Cojedes", "tinaco"),

    // Yaracuy
    city("San Felipe", "Yaracuy", "san-felipe"),
    city("Yaritagua", "Yaracuy", "yaritagua"),
    city("Chivacoa", "Yaracuy", "chivacoa"),
    city("Cocorote", "Yaracuy", "cocorote"),
    city("Nirgua", "Yaracuy", "nirgua"),

    // Trujillo
    city("Trujillo", "Trujillo", "trujillo"),
    city("Valera", "Trujillo", "valera"),
    city("Boconó", "Trujillo", "bocono"),
    city("La Grita", "Trujillo", "la-grita-trujillo"),
    city("Escuque", "Trujillo", "escuque"),

    // Delta Amacuro
    city("Tucupita", "Delta Amacuro", "tucupita"),
    city("Pedernales", "Delta Amacuro", "pedernales"),
    city("Curiapo", "Delta Amacuro", "curiapo"),

    // Amazonas
    city("Puerto Ayacucho", "Amazonas", "puerto-ayacucho"),
    city("La Esmeralda", "Amazonas", "la-esmeralda"),
    city("Maroa", "Amazonas", "maroa"),

    // Vargas
    city("La Guaira", "Vargas", "la-guaira"),
    city("Catia La Mar", "Vargas", "catia-la-mar"),
    city("Maiquetía", "Vargas", "maiquetia"),
    city("Macuto", "Vargas", "macuto"),
    city("Naiguatá", "Vargas", "naiguata"),
];

pub fn find_city_by_slug(slug: &str) -> Option<&'static CityEntry> {
    VENEZUELAN_CITIES.iter().find(|c| c.url_slug == slug)
}

/// Distinct region names, in table order.
pub fn regions() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for c in VENEZUELAN_CITIES {
        if !out.contains(&c.region) {
            out.push(c.region);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_maracay_in_aragua() {
        let c = find_city_by_slug("maracay").expect("maracay missing");
        assert_eq!(c.display_name, "Maracay");
        assert_eq!(c.region, "Aragua");
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(find_city_by_slug("atlantis").is_none());
    }

    #[test]
    fn regions_are_distinct_and_start_with_capital() {
        let r = regions();
        assert_eq!(r[0], "Distrito Capital");
        let mut sorted = r.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), r.len());
    }
}
