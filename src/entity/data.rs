// Generated reference table: a representative subset of the HTML5 named
// character reference list (https://html.spec.whatwg.org/multipage/named-characters.html).
// Sorted lexicographically by name (ASCII byte order) -- `EntitySearcher` depends on this.

use super::Entity;

pub static ENTITIES: &[Entity] = &[
    Entity { name: "AElig", codepoints: (0x00C6, None) },
    Entity { name: "AElig;", codepoints: (0x00C6, None) },
    Entity { name: "AMP", codepoints: (0x0026, None) },
    Entity { name: "AMP;", codepoints: (0x0026, None) },
    Entity { name: "Aacute", codepoints: (0x00C1, None) },
    Entity { name: "Aacute;", codepoints: (0x00C1, None) },
    Entity { name: "Acirc", codepoints: (0x00C2, None) },
    Entity { name: "Acirc;", codepoints: (0x00C2, None) },
    Entity { name: "Agrave", codepoints: (0x00C0, None) },
    Entity { name: "Agrave;", codepoints: (0x00C0, None) },
    Entity { name: "Alpha;", codepoints: (0x0391, None) },
    Entity { name: "Aring", codepoints: (0x00C5, None) },
    Entity { name: "Aring;", codepoints: (0x00C5, None) },
    Entity { name: "Atilde", codepoints: (0x00C3, None) },
    Entity { name: "Atilde;", codepoints: (0x00C3, None) },
    Entity { name: "Auml", codepoints: (0x00C4, None) },
    Entity { name: "Auml;", codepoints: (0x00C4, None) },
    Entity { name: "Beta;", codepoints: (0x0392, None) },
    Entity { name: "COPY", codepoints: (0x00A9, None) },
    Entity { name: "COPY;", codepoints: (0x00A9, None) },
    Entity { name: "Ccedil", codepoints: (0x00C7, None) },
    Entity { name: "Ccedil;", codepoints: (0x00C7, None) },
    Entity { name: "Chi;", codepoints: (0x03A7, None) },
    Entity { name: "Dagger;", codepoints: (0x2021, None) },
    Entity { name: "Delta;", codepoints: (0x0394, None) },
    Entity { name: "ETH", codepoints: (0x00D0, None) },
    Entity { name: "ETH;", codepoints: (0x00D0, None) },
    Entity { name: "Eacute", codepoints: (0x00C9, None) },
    Entity { name: "Eacute;", codepoints: (0x00C9, None) },
    Entity { name: "Ecirc", codepoints: (0x00CA, None) },
    Entity { name: "Ecirc;", codepoints: (0x00CA, None) },
    Entity { name: "Egrave", codepoints: (0x00C8, None) },
    Entity { name: "Egrave;", codepoints: (0x00C8, None) },
    Entity { name: "Epsilon;", codepoints: (0x0395, None) },
    Entity { name: "Eta;", codepoints: (0x0397, None) },
    Entity { name: "Euml", codepoints: (0x00CB, None) },
    Entity { name: "Euml;", codepoints: (0x00CB, None) },
    Entity { name: "GT", codepoints: (0x003E, None) },
    Entity { name: "GT;", codepoints: (0x003E, None) },
    Entity { name: "Gamma;", codepoints: (0x0393, None) },
    Entity { name: "Iacute", codepoints: (0x00CD, None) },
    Entity { name: "Iacute;", codepoints: (0x00CD, None) },
    Entity { name: "Icirc", codepoints: (0x00CE, None) },
    Entity { name: "Icirc;", codepoints: (0x00CE, None) },
    Entity { name: "Igrave", codepoints: (0x00CC, None) },
    Entity { name: "Igrave;", codepoints: (0x00CC, None) },
    Entity { name: "Iota;", codepoints: (0x0399, None) },
    Entity { name: "Iuml", codepoints: (0x00CF, None) },
    Entity { name: "Iuml;", codepoints: (0x00CF, None) },
    Entity { name: "Kappa;", codepoints: (0x039A, None) },
    Entity { name: "LT", codepoints: (0x003C, None) },
    Entity { name: "LT;", codepoints: (0x003C, None) },
    Entity { name: "Lambda;", codepoints: (0x039B, None) },
    Entity { name: "Mu;", codepoints: (0x039C, None) },
    Entity { name: "NotEqualTilde;", codepoints: (0x2242, Some(0x0338)) },
    Entity { name: "Ntilde", codepoints: (0x00D1, None) },
    Entity { name: "Ntilde;", codepoints: (0x00D1, None) },
    Entity { name: "Nu;", codepoints: (0x039D, None) },
    Entity { name: "OElig;", codepoints: (0x0152, None) },
    Entity { name: "Oacute", codepoints: (0x00D3, None) },
    Entity { name: "Oacute;", codepoints: (0x00D3, None) },
    Entity { name: "Ocirc", codepoints: (0x00D4, None) },
    Entity { name: "Ocirc;", codepoints: (0x00D4, None) },
    Entity { name: "Ograve", codepoints: (0x00D2, None) },
    Entity { name: "Ograve;", codepoints: (0x00D2, None) },
    Entity { name: "Omega;", codepoints: (0x03A9, None) },
    Entity { name: "Omicron;", codepoints: (0x039F, None) },
    Entity { name: "Oslash", codepoints: (0x00D8, None) },
    Entity { name: "Oslash;", codepoints: (0x00D8, None) },
    Entity { name: "Otilde", codepoints: (0x00D5, None) },
    Entity { name: "Otilde;", codepoints: (0x00D5, None) },
    Entity { name: "Ouml", codepoints: (0x00D6, None) },
    Entity { name: "Ouml;", codepoints: (0x00D6, None) },
    Entity { name: "Phi;", codepoints: (0x03A6, None) },
    Entity { name: "Pi;", codepoints: (0x03A0, None) },
    Entity { name: "Prime;", codepoints: (0x2033, None) },
    Entity { name: "Psi;", codepoints: (0x03A8, None) },
    Entity { name: "QUOT", codepoints: (0x0022, None) },
    Entity { name: "QUOT;", codepoints: (0x0022, None) },
    Entity { name: "REG", codepoints: (0x00AE, None) },
    Entity { name: "REG;", codepoints: (0x00AE, None) },
    Entity { name: "Rho;", codepoints: (0x03A1, None) },
    Entity { name: "Scaron;", codepoints: (0x0160, None) },
    Entity { name: "Sigma;", codepoints: (0x03A3, None) },
    Entity { name: "THORN", codepoints: (0x00DE, None) },
    Entity { name: "THORN;", codepoints: (0x00DE, None) },
    Entity { name: "Tau;", codepoints: (0x03A4, None) },
    Entity { name: "Theta;", codepoints: (0x0398, None) },
    Entity { name: "Uacute", codepoints: (0x00DA, None) },
    Entity { name: "Uacute;", codepoints: (0x00DA, None) },
    Entity { name: "Ucirc", codepoints: (0x00DB, None) },
    Entity { name: "Ucirc;", codepoints: (0x00DB, None) },
    Entity { name: "Ugrave", codepoints: (0x00D9, None) },
    Entity { name: "Ugrave;", codepoints: (0x00D9, None) },
    Entity { name: "Upsilon;", codepoints: (0x03A5, None) },
    Entity { name: "Uuml", codepoints: (0x00DC, None) },
    Entity { name: "Uuml;", codepoints: (0x00DC, None) },
    Entity { name: "Xi;", codepoints: (0x039E, None) },
    Entity { name: "Yacute", codepoints: (0x00DD, None) },
    Entity { name: "Yacute;", codepoints: (0x00DD, None) },
    Entity { name: "Yuml;", codepoints: (0x0178, None) },
    Entity { name: "Zeta;", codepoints: (0x0396, None) },
    Entity { name: "aacute", codepoints: (0x00E1, None) },
    Entity { name: "aacute;", codepoints: (0x00E1, None) },
    Entity { name: "acE;", codepoints: (0x223E, Some(0x0333)) },
    Entity { name: "acirc", codepoints: (0x00E2, None) },
    Entity { name: "acirc;", codepoints: (0x00E2, None) },
    Entity { name: "acute", codepoints: (0x00B4, None) },
    Entity { name: "acute;", codepoints: (0x00B4, None) },
    Entity { name: "aelig", codepoints: (0x00E6, None) },
    Entity { name: "aelig;", codepoints: (0x00E6, None) },
    Entity { name: "agrave", codepoints: (0x00E0, None) },
    Entity { name: "agrave;", codepoints: (0x00E0, None) },
    Entity { name: "alefsym;", codepoints: (0x2135, None) },
    Entity { name: "alpha;", codepoints: (0x03B1, None) },
    Entity { name: "amp", codepoints: (0x0026, None) },
    Entity { name: "amp;", codepoints: (0x0026, None) },
    Entity { name: "and;", codepoints: (0x2227, None) },
    Entity { name: "ang;", codepoints: (0x2220, None) },
    Entity { name: "apos;", codepoints: (0x0027, None) },
    Entity { name: "aring", codepoints: (0x00E5, None) },
    Entity { name: "aring;", codepoints: (0x00E5, None) },
    Entity { name: "asymp;", codepoints: (0x2248, None) },
    Entity { name: "atilde", codepoints: (0x00E3, None) },
    Entity { name: "atilde;", codepoints: (0x00E3, None) },
    Entity { name: "auml", codepoints: (0x00E4, None) },
    Entity { name: "auml;", codepoints: (0x00E4, None) },
    Entity { name: "bdquo;", codepoints: (0x201E, None) },
    Entity { name: "beta;", codepoints: (0x03B2, None) },
    Entity { name: "brvbar", codepoints: (0x00A6, None) },
    Entity { name: "brvbar;", codepoints: (0x00A6, None) },
    Entity { name: "bull;", codepoints: (0x2022, None) },
    Entity { name: "cap;", codepoints: (0x2229, None) },
    Entity { name: "ccedil", codepoints: (0x00E7, None) },
    Entity { name: "ccedil;", codepoints: (0x00E7, None) },
    Entity { name: "cedil", codepoints: (0x00B8, None) },
    Entity { name: "cedil;", codepoints: (0x00B8, None) },
    Entity { name: "cent", codepoints: (0x00A2, None) },
    Entity { name: "cent;", codepoints: (0x00A2, None) },
    Entity { name: "chi;", codepoints: (0x03C6, None) },
    Entity { name: "circ;", codepoints: (0x02C6, None) },
    Entity { name: "clubs;", codepoints: (0x2663, None) },
    Entity { name: "cong;", codepoints: (0x2245, None) },
    Entity { name: "copy", codepoints: (0x00A9, None) },
    Entity { name: "copy;", codepoints: (0x00A9, None) },
    Entity { name: "crarr;", codepoints: (0x21B5, None) },
    Entity { name: "cup;", codepoints: (0x222A, None) },
    Entity { name: "curren", codepoints: (0x00A4, None) },
    Entity { name: "curren;", codepoints: (0x00A4, None) },
    Entity { name: "dArr;", codepoints: (0x21D3, None) },
    Entity { name: "dagger;", codepoints: (0x2020, None) },
    Entity { name: "darr;", codepoints: (0x2193, None) },
    Entity { name: "deg", codepoints: (0x00B0, None) },
    Entity { name: "deg;", codepoints: (0x00B0, None) },
    Entity { name: "delta;", codepoints: (0x03B4, None) },
    Entity { name: "diams;", codepoints: (0x2666, None) },
    Entity { name: "divide", codepoints: (0x00F7, None) },
    Entity { name: "divide;", codepoints: (0x00F7, None) },
    Entity { name: "eacute", codepoints: (0x00E9, None) },
    Entity { name: "eacute;", codepoints: (0x00E9, None) },
    Entity { name: "ecirc", codepoints: (0x00EA, None) },
    Entity { name: "ecirc;", codepoints: (0x00EA, None) },
    Entity { name: "egrave", codepoints: (0x00E8, None) },
    Entity { name: "egrave;", codepoints: (0x00E8, None) },
    Entity { name: "empty;", codepoints: (0x2205, None) },
    Entity { name: "emsp;", codepoints: (0x2003, None) },
    Entity { name: "ensp;", codepoints: (0x2002, None) },
    Entity { name: "epsilon;", codepoints: (0x03B5, None) },
    Entity { name: "equiv;", codepoints: (0x2261, None) },
    Entity { name: "eta;", codepoints: (0x03B7, None) },
    Entity { name: "eth", codepoints: (0x00F0, None) },
    Entity { name: "eth;", codepoints: (0x00F0, None) },
    Entity { name: "euml", codepoints: (0x00EB, None) },
    Entity { name: "euml;", codepoints: (0x00EB, None) },
    Entity { name: "euro;", codepoints: (0x20AC, None) },
    Entity { name: "exist;", codepoints: (0x2203, None) },
    Entity { name: "fnof;", codepoints: (0x0192, None) },
    Entity { name: "forall;", codepoints: (0x2200, None) },
    Entity { name: "frac12", codepoints: (0x00BD, None) },
    Entity { name: "frac12;", codepoints: (0x00BD, None) },
    Entity { name: "frac14", codepoints: (0x00BC, None) },
    Entity { name: "frac14;", codepoints: (0x00BC, None) },
    Entity { name: "frac34", codepoints: (0x00BE, None) },
    Entity { name: "frac34;", codepoints: (0x00BE, None) },
    Entity { name: "frasl;", codepoints: (0x2044, None) },
    Entity { name: "gamma;", codepoints: (0x03B3, None) },
    Entity { name: "ge;", codepoints: (0x2265, None) },
    Entity { name: "gt", codepoints: (0x003E, None) },
    Entity { name: "gt;", codepoints: (0x003E, None) },
    Entity { name: "hArr;", codepoints: (0x21D4, None) },
    Entity { name: "harr;", codepoints: (0x2194, None) },
    Entity { name: "hearts;", codepoints: (0x2665, None) },
    Entity { name: "hellip;", codepoints: (0x2026, None) },
    Entity { name: "iacute", codepoints: (0x00ED, None) },
    Entity { name: "iacute;", codepoints: (0x00ED, None) },
    Entity { name: "icirc", codepoints: (0x00EE, None) },
    Entity { name: "icirc;", codepoints: (0x00EE, None) },
    Entity { name: "iexcl", codepoints: (0x00A1, None) },
    Entity { name: "iexcl;", codepoints: (0x00A1, None) },
    Entity { name: "igrave", codepoints: (0x00EC, None) },
    Entity { name: "igrave;", codepoints: (0x00EC, None) },
    Entity { name: "image;", codepoints: (0x2111, None) },
    Entity { name: "infin;", codepoints: (0x221E, None) },
    Entity { name: "int;", codepoints: (0x222B, None) },
    Entity { name: "iota;", codepoints: (0x03B9, None) },
    Entity { name: "iquest", codepoints: (0x00BF, None) },
    Entity { name: "iquest;", codepoints: (0x00BF, None) },
    Entity { name: "isin;", codepoints: (0x2208, None) },
    Entity { name: "iuml", codepoints: (0x00EF, None) },
    Entity { name: "iuml;", codepoints: (0x00EF, None) },
    Entity { name: "kappa;", codepoints: (0x03BA, None) },
    Entity { name: "lArr;", codepoints: (0x21D0, None) },
    Entity { name: "lambda;", codepoints: (0x03BB, None) },
    Entity { name: "lang;", codepoints: (0x27E8, None) },
    Entity { name: "laquo", codepoints: (0x00AB, None) },
    Entity { name: "laquo;", codepoints: (0x00AB, None) },
    Entity { name: "larr;", codepoints: (0x2190, None) },
    Entity { name: "lceil;", codepoints: (0x2308, None) },
    Entity { name: "ldquo;", codepoints: (0x201C, None) },
    Entity { name: "le;", codepoints: (0x2264, None) },
    Entity { name: "lfloor;", codepoints: (0x230A, None) },
    Entity { name: "lowast;", codepoints: (0x2217, None) },
    Entity { name: "loz;", codepoints: (0x25CA, None) },
    Entity { name: "lrm;", codepoints: (0x200E, None) },
    Entity { name: "lsaquo;", codepoints: (0x2039, None) },
    Entity { name: "lsquo;", codepoints: (0x2018, None) },
    Entity { name: "lt", codepoints: (0x003C, None) },
    Entity { name: "lt;", codepoints: (0x003C, None) },
    Entity { name: "macr", codepoints: (0x00AF, None) },
    Entity { name: "macr;", codepoints: (0x00AF, None) },
    Entity { name: "mdash;", codepoints: (0x2014, None) },
    Entity { name: "micro", codepoints: (0x00B5, None) },
    Entity { name: "micro;", codepoints: (0x00B5, None) },
    Entity { name: "middot", codepoints: (0x00B7, None) },
    Entity { name: "middot;", codepoints: (0x00B7, None) },
    Entity { name: "minus;", codepoints: (0x2212, None) },
    Entity { name: "mu;", codepoints: (0x03BC, None) },
    Entity { name: "nabla;", codepoints: (0x2207, None) },
    Entity { name: "nbsp", codepoints: (0x00A0, None) },
    Entity { name: "nbsp;", codepoints: (0x00A0, None) },
    Entity { name: "ndash;", codepoints: (0x2013, None) },
    Entity { name: "ne;", codepoints: (0x2260, None) },
    Entity { name: "ni;", codepoints: (0x220B, None) },
    Entity { name: "not", codepoints: (0x00AC, None) },
    Entity { name: "not;", codepoints: (0x00AC, None) },
    Entity { name: "notin;", codepoints: (0x2209, None) },
    Entity { name: "nsub;", codepoints: (0x2284, None) },
    Entity { name: "ntilde", codepoints: (0x00F1, None) },
    Entity { name: "ntilde;", codepoints: (0x00F1, None) },
    Entity { name: "nu;", codepoints: (0x03BD, None) },
    Entity { name: "oacute", codepoints: (0x00F3, None) },
    Entity { name: "oacute;", codepoints: (0x00F3, None) },
    Entity { name: "ocirc", codepoints: (0x00F4, None) },
    Entity { name: "ocirc;", codepoints: (0x00F4, None) },
    Entity { name: "oelig;", codepoints: (0x0153, None) },
    Entity { name: "ograve", codepoints: (0x00F2, None) },
    Entity { name: "ograve;", codepoints: (0x00F2, None) },
    Entity { name: "oline;", codepoints: (0x203E, None) },
    Entity { name: "omega;", codepoints: (0x03C8, None) },
    Entity { name: "omicron;", codepoints: (0x03BF, None) },
    Entity { name: "oplus;", codepoints: (0x2295, None) },
    Entity { name: "or;", codepoints: (0x2228, None) },
    Entity { name: "ordf", codepoints: (0x00AA, None) },
    Entity { name: "ordf;", codepoints: (0x00AA, None) },
    Entity { name: "ordm", codepoints: (0x00BA, None) },
    Entity { name: "ordm;", codepoints: (0x00BA, None) },
    Entity { name: "oslash", codepoints: (0x00F8, None) },
    Entity { name: "oslash;", codepoints: (0x00F8, None) },
    Entity { name: "otilde", codepoints: (0x00F5, None) },
    Entity { name: "otilde;", codepoints: (0x00F5, None) },
    Entity { name: "otimes;", codepoints: (0x2297, None) },
    Entity { name: "ouml", codepoints: (0x00F6, None) },
    Entity { name: "ouml;", codepoints: (0x00F6, None) },
    Entity { name: "para", codepoints: (0x00B6, None) },
    Entity { name: "para;", codepoints: (0x00B6, None) },
    Entity { name: "part;", codepoints: (0x2202, None) },
    Entity { name: "permil;", codepoints: (0x2030, None) },
    Entity { name: "perp;", codepoints: (0x22A5, None) },
    Entity { name: "phi;", codepoints: (0x03C5, None) },
    Entity { name: "pi;", codepoints: (0x03C0, None) },
    Entity { name: "piv;", codepoints: (0x03D6, None) },
    Entity { name: "plusmn", codepoints: (0x00B1, None) },
    Entity { name: "plusmn;", codepoints: (0x00B1, None) },
    Entity { name: "pound", codepoints: (0x00A3, None) },
    Entity { name: "pound;", codepoints: (0x00A3, None) },
    Entity { name: "prime;", codepoints: (0x2032, None) },
    Entity { name: "prod;", codepoints: (0x220F, None) },
    Entity { name: "prop;", codepoints: (0x221D, None) },
    Entity { name: "psi;", codepoints: (0x03C7, None) },
    Entity { name: "quot", codepoints: (0x0022, None) },
    Entity { name: "quot;", codepoints: (0x0022, None) },
    Entity { name: "rArr;", codepoints: (0x21D2, None) },
    Entity { name: "radic;", codepoints: (0x221A, None) },
    Entity { name: "rang;", codepoints: (0x27E9, None) },
    Entity { name: "raquo", codepoints: (0x00BB, None) },
    Entity { name: "raquo;", codepoints: (0x00BB, None) },
    Entity { name: "rarr;", codepoints: (0x2192, None) },
    Entity { name: "rceil;", codepoints: (0x2309, None) },
    Entity { name: "rdquo;", codepoints: (0x201D, None) },
    Entity { name: "real;", codepoints: (0x211C, None) },
    Entity { name: "reg", codepoints: (0x00AE, None) },
    Entity { name: "reg;", codepoints: (0x00AE, None) },
    Entity { name: "rfloor;", codepoints: (0x230B, None) },
    Entity { name: "rho;", codepoints: (0x03C1, None) },
    Entity { name: "rlm;", codepoints: (0x200F, None) },
    Entity { name: "rsaquo;", codepoints: (0x203A, None) },
    Entity { name: "rsquo;", codepoints: (0x2019, None) },
    Entity { name: "sbquo;", codepoints: (0x201A, None) },
    Entity { name: "scaron;", codepoints: (0x0161, None) },
    Entity { name: "sdot;", codepoints: (0x22C5, None) },
    Entity { name: "sect", codepoints: (0x00A7, None) },
    Entity { name: "sect;", codepoints: (0x00A7, None) },
    Entity { name: "shy", codepoints: (0x00AD, None) },
    Entity { name: "shy;", codepoints: (0x00AD, None) },
    Entity { name: "sigma;", codepoints: (0x03C2, None) },
    Entity { name: "sigmaf;", codepoints: (0x03C2, None) },
    Entity { name: "sim;", codepoints: (0x223C, None) },
    Entity { name: "spades;", codepoints: (0x2660, None) },
    Entity { name: "sub;", codepoints: (0x2282, None) },
    Entity { name: "sube;", codepoints: (0x2286, None) },
    Entity { name: "sum;", codepoints: (0x2211, None) },
    Entity { name: "sup1", codepoints: (0x00B9, None) },
    Entity { name: "sup1;", codepoints: (0x00B9, None) },
    Entity { name: "sup2", codepoints: (0x00B2, None) },
    Entity { name: "sup2;", codepoints: (0x00B2, None) },
    Entity { name: "sup3", codepoints: (0x00B3, None) },
    Entity { name: "sup3;", codepoints: (0x00B3, None) },
    Entity { name: "sup;", codepoints: (0x2283, None) },
    Entity { name: "supe;", codepoints: (0x2287, None) },
    Entity { name: "szlig", codepoints: (0x00DF, None) },
    Entity { name: "szlig;", codepoints: (0x00DF, None) },
    Entity { name: "tau;", codepoints: (0x03C3, None) },
    Entity { name: "there4;", codepoints: (0x2234, None) },
    Entity { name: "theta;", codepoints: (0x03B8, None) },
    Entity { name: "thetasym;", codepoints: (0x03D1, None) },
    Entity { name: "thinsp;", codepoints: (0x2009, None) },
    Entity { name: "thorn", codepoints: (0x00FE, None) },
    Entity { name: "thorn;", codepoints: (0x00FE, None) },
    Entity { name: "tilde;", codepoints: (0x02DC, None) },
    Entity { name: "times", codepoints: (0x00D7, None) },
    Entity { name: "times;", codepoints: (0x00D7, None) },
    Entity { name: "trade;", codepoints: (0x2122, None) },
    Entity { name: "uArr;", codepoints: (0x21D1, None) },
    Entity { name: "uacute", codepoints: (0x00FA, None) },
    Entity { name: "uacute;", codepoints: (0x00FA, None) },
    Entity { name: "uarr;", codepoints: (0x2191, None) },
    Entity { name: "ucirc", codepoints: (0x00FB, None) },
    Entity { name: "ucirc;", codepoints: (0x00FB, None) },
    Entity { name: "ugrave", codepoints: (0x00F9, None) },
    Entity { name: "ugrave;", codepoints: (0x00F9, None) },
    Entity { name: "uml", codepoints: (0x00A8, None) },
    Entity { name: "uml;", codepoints: (0x00A8, None) },
    Entity { name: "upsih;", codepoints: (0x03D2, None) },
    Entity { name: "upsilon;", codepoints: (0x03C4, None) },
    Entity { name: "uuml", codepoints: (0x00FC, None) },
    Entity { name: "uuml;", codepoints: (0x00FC, None) },
    Entity { name: "weierp;", codepoints: (0x2118, None) },
    Entity { name: "xi;", codepoints: (0x03BE, None) },
    Entity { name: "yacute", codepoints: (0x00FD, None) },
    Entity { name: "yacute;", codepoints: (0x00FD, None) },
    Entity { name: "yen", codepoints: (0x00A5, None) },
    Entity { name: "yen;", codepoints: (0x00A5, None) },
    Entity { name: "yuml", codepoints: (0x00FF, None) },
    Entity { name: "yuml;", codepoints: (0x00FF, None) },
    Entity { name: "zeta;", codepoints: (0x03B6, None) },
    Entity { name: "zwj;", codepoints: (0x200D, None) },
    Entity { name: "zwnj;", codepoints: (0x200C, None) },
];

pub const ENTITY_COUNT: usize = 367;
