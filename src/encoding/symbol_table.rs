//! Built-in encoding of the Symbol font (PDF Annex D.5).

/// Glyph names by character code.
pub(super) const ENTRIES: &[(u8, &str)] = &[
    (0o101, "Alpha"),
    (0o102, "Beta"),
    (0o103, "Chi"),
    (0o104, "Delta"),
    (0o105, "Epsilon"),
    (0o110, "Eta"),
    (0o240, "Euro"),
    (0o107, "Gamma"),
    (0o301, "Ifraktur"),
    (0o111, "Iota"),
    (0o113, "Kappa"),
    (0o114, "Lambda"),
    (0o115, "Mu"),
    (0o116, "Nu"),
    (0o127, "Omega"),
    (0o117, "Omicron"),
    (0o106, "Phi"),
    (0o120, "Pi"),
    (0o131, "Psi"),
    (0o302, "Rfraktur"),
    (0o122, "Rho"),
    (0o123, "Sigma"),
    (0o124, "Tau"),
    (0o121, "Theta"),
    (0o125, "Upsilon"),
    (0o241, "Upsilon1"),
    (0o130, "Xi"),
    (0o132, "Zeta"),
    (0o300, "aleph"),
    (0o141, "alpha"),
    (0o046, "ampersand"),
    (0o320, "angle"),
    (0o341, "angleleft"),
    (0o361, "angleright"),
    (0o273, "approxequal"),
    (0o253, "arrowboth"),
    (0o333, "arrowdblboth"),
    (0o337, "arrowdbldown"),
    (0o334, "arrowdblleft"),
    (0o336, "arrowdblright"),
    (0o335, "arrowdblup"),
    (0o257, "arrowdown"),
    (0o276, "arrowhorizex"),
    (0o254, "arrowleft"),
    (0o256, "arrowright"),
    (0o255, "arrowup"),
    (0o275, "arrowvertex"),
    (0o052, "asteriskmath"),
    (0o174, "bar"),
    (0o142, "beta"),
    (0o173, "braceleft"),
    (0o175, "braceright"),
    (0o354, "bracelefttp"),
    (0o355, "braceleftmid"),
    (0o356, "braceleftbt"),
    (0o374, "bracerighttp"),
    (0o375, "bracerightmid"),
    (0o376, "bracerightbt"),
    (0o357, "braceex"),
    (0o133, "bracketleft"),
    (0o135, "bracketright"),
    (0o351, "bracketlefttp"),
    (0o352, "bracketleftex"),
    (0o353, "bracketleftbt"),
    (0o371, "bracketrighttp"),
    (0o372, "bracketrightex"),
    (0o373, "bracketrightbt"),
    (0o267, "bullet"),
    (0o277, "carriagereturn"),
    (0o143, "chi"),
    (0o304, "circlemultiply"),
    (0o305, "circleplus"),
    (0o247, "club"),
    (0o072, "colon"),
    (0o054, "comma"),
    (0o100, "congruent"),
    (0o343, "copyrightsans"),
    (0o323, "copyrightserif"),
    (0o260, "degree"),
    (0o144, "delta"),
    (0o250, "diamond"),
    (0o270, "divide"),
    (0o327, "dotmath"),
    (0o070, "eight"),
    (0o316, "element"),
    (0o274, "ellipsis"),
    (0o306, "emptyset"),
    (0o145, "epsilon"),
    (0o075, "equal"),
    (0o272, "equivalence"),
    (0o150, "eta"),
    (0o041, "exclam"),
    (0o044, "existential"),
    (0o065, "five"),
    (0o246, "florin"),
    (0o064, "four"),
    (0o244, "fraction"),
    (0o147, "gamma"),
    (0o321, "gradient"),
    (0o076, "greater"),
    (0o263, "greaterequal"),
    (0o251, "heart"),
    (0o245, "infinity"),
    (0o362, "integral"),
    (0o363, "integraltp"),
    (0o364, "integralex"),
    (0o365, "integralbt"),
    (0o307, "intersection"),
    (0o151, "iota"),
    (0o153, "kappa"),
    (0o154, "lambda"),
    (0o074, "less"),
    (0o243, "lessequal"),
    (0o331, "logicaland"),
    (0o330, "logicalnot"),
    (0o332, "logicalor"),
    (0o340, "lozenge"),
    (0o055, "minus"),
    (0o242, "minute"),
    (0o155, "mu"),
    (0o264, "multiply"),
    (0o071, "nine"),
    (0o317, "notelement"),
    (0o271, "notequal"),
    (0o313, "notsubset"),
    (0o156, "nu"),
    (0o043, "numbersign"),
    (0o167, "omega"),
    (0o166, "omega1"),
    (0o157, "omicron"),
    (0o061, "one"),
    (0o050, "parenleft"),
    (0o051, "parenright"),
    (0o346, "parenlefttp"),
    (0o347, "parenleftex"),
    (0o350, "parenleftbt"),
    (0o366, "parenrighttp"),
    (0o367, "parenrightex"),
    (0o370, "parenrightbt"),
    (0o266, "partialdiff"),
    (0o045, "percent"),
    (0o056, "period"),
    (0o136, "perpendicular"),
    (0o146, "phi"),
    (0o152, "phi1"),
    (0o160, "pi"),
    (0o053, "plus"),
    (0o261, "plusminus"),
    (0o325, "product"),
    (0o314, "propersubset"),
    (0o311, "propersuperset"),
    (0o265, "proportional"),
    (0o171, "psi"),
    (0o077, "question"),
    (0o326, "radical"),
    (0o140, "radicalex"),
    (0o315, "reflexsubset"),
    (0o312, "reflexsuperset"),
    (0o342, "registersans"),
    (0o322, "registerserif"),
    (0o162, "rho"),
    (0o262, "second"),
    (0o073, "semicolon"),
    (0o067, "seven"),
    (0o163, "sigma"),
    (0o126, "sigma1"),
    (0o176, "similar"),
    (0o066, "six"),
    (0o057, "slash"),
    (0o040, "space"),
    (0o252, "spade"),
    (0o047, "suchthat"),
    (0o345, "summation"),
    (0o164, "tau"),
    (0o134, "therefore"),
    (0o161, "theta"),
    (0o112, "theta1"),
    (0o063, "three"),
    (0o344, "trademarksans"),
    (0o324, "trademarkserif"),
    (0o062, "two"),
    (0o137, "underscore"),
    (0o310, "union"),
    (0o042, "universal"),
    (0o165, "upsilon"),
    (0o303, "weierstrass"),
    (0o170, "xi"),
    (0o060, "zero"),
    (0o172, "zeta"),
];
