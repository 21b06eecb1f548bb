// Generated by tools/gen_table.py. Do not edit by hand.
//
// One entry per lightness level, one run per hue step. A run holds the
// x coordinates followed by the y coordinates for chroma 0, 2, 4, ...,
// each double-delta encoded in units of 1e-5.

pub(crate) const TBL_V: [f64; 14] = [0.2, 0.4, 0.6, 0.8, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

#[rustfmt::skip]
pub(crate) static TBL_SRC_MIN: [&[&[i32]]; 14] = [
    // V = 0.2
    &[
        &[31006, -20254, -3724, -2434, -1590, -1041, -679, -445, 31616, -34098, 859, 562, 368, 240, 156, 104],
        &[31006, -17911, -4763, -3031, -1928, -1227, -781, 31616, -33340, 627, 399, 254, 162, 102],
        &[31006, -16260, -5615, -3476, -2153, -1333, -826, 31616, -32131, 196, 122, 74, 48, 28],
        &[31006, -16528, -5902, -3496, -2071, -1226, 31616, -30857, -310, -183, -108, -64],
        &[31006, -16803, -6156, -3487, -1977, -1119, 31616, -29620, -865, -490, -278, -157],
        &[31006, -17800, -6049, -3277, -1778, 31616, -27704, -1792, -971, -526],
        &[31006, -18733, -5910, -3065, -1588, 31616, -25893, -2756, -1429, -741],
        &[31006, -18338, -6876, -3143, 31616, -24004, -4132, -1889],
        &[31006, -18293, -7587, -3059, 31616, -22036, -5717, -2305],
        &[31006, -18448, -8092, 31616, -20109, -7414],
        &[31006, -18865, -8332, 31616, -18132, -9254],
        &[31006, -20508, -6871, 31616, -17685, -9118],
        &[31006, -22119, -5504, -2096, 31616, -17393, -8811, -3352],
        &[31006, -24121, -3999, -1676, 31616, -16851, -8576, -3595],
        &[31006, -26092, -2646, -1220, 31616, -16493, -8141, -3759],
        &[31006, -28820, -1045, -547, -284, 31616, -16058, -7446, -3882, -2025],
        &[31006, -31552, 224, 133, 77, 46, 31616, -15975, -6430, -3786, -2230, -1314],
        &[31006, -37514, 2180, 1448, 965, 641, 427, 283, 31616, -14663, -5676, -3776, -2512, -1670, -1111, -740],
        &[31006, -38489, 1861, 1399, 1050, 789, 593, 445, 335, 252, 188, 31616, -22698, -2218, -1667, -1251, -941, -707, -530, -400, -299, -225],
        &[31006, -38736, 1957, 1460, 1092, 815, 609, 455, 339, 254, 190, 31616, -26204, -1369, -1023, -765, -570, -427, -318, -238, -177, -134],
        &[31006, -38540, 1940, 1439, 1070, 794, 589, 438, 326, 241, 180, 31616, -28874, -706, -524, -389, -289, -214, -160, -119, -87, -66],
        &[31006, -38375, 1928, 1425, 1050, 776, 573, 424, 311, 231, 31616, -30317, -339, -252, -185, -137, -101, -74, -56, -40],
        &[31006, -38182, 1909, 1401, 1027, 756, 554, 406, 299, 219, 31616, -31616, 0, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -38485, 2145, 1531, 1091, 778, 555, 396, 281, 31616, -32601, 283, 201, 144, 103, 72, 53, 36],
        &[31006, -38726, 2372, 1644, 1138, 788, 547, 378, 262, 31616, -33685, 637, 439, 305, 212, 146, 102, 69],
        &[31006, -38944, 2596, 1748, 1175, 791, 533, 358, 31616, -34743, 1023, 688, 463, 312, 210, 140],
        &[31006, -39098, 2802, 1832, 1197, 783, 512, 335, 31616, -35919, 1490, 975, 636, 416, 272, 179],
        &[31006, -39405, 3116, 1961, 1232, 776, 487, 31616, -37071, 2025, 1272, 801, 504, 316],
        &[31006, -39638, 3409, 2063, 1248, 755, 31616, -38360, 2663, 1612, 975, 590],
        &[31006, -39791, 3671, 2137, 1244, 724, 31616, -39808, 3423, 1993, 1160, 675],
        &[31006, -39856, 3893, 2181, 1221, 685, 31616, -41445, 4324, 2422, 1356, 760],
        &[31006, -38822, 3310, 1908, 1101, 633, 31616, -42988, 4816, 2776, 1600, 924],
        &[31006, -37214, 2524, 1497, 890, 526, 31616, -43799, 4952, 2939, 1746, 1034],
        &[31006, -34255, 1265, 771, 472, 289, 175, 31616, -41919, 4008, 2449, 1496, 915, 558],
        &[31006, -32260, 465, 293, 184, 116, 73, 31616, -40539, 3311, 2082, 1311, 823, 518],
        &[31006, -30209, -283, -184, -117, -76, -49, 31616, -39203, 2703, 1741, 1120, 720, 465],
        &[31006, -28646, -806, -530, -349, -231, -151, -100, 31616, -38099, 2212, 1458, 959, 633, 417, 274],
        &[31006, -27046, -1289, -871, -586, -396, -266, -180, 31616, -36968, 1743, 1176, 793, 534, 360, 243],
        &[31006, -25427, -1729, -1193, -824, -568, -392, -270, -188, 31616, -35820, 1302, 900, 621, 428, 295, 204, 141],
        &[31006, -23320, -2524, -1695, -1139, -764, -513, -346, 31616, -35200, 1177, 790, 531, 357, 239, 162],
    ],
    // V = 0.4
    &[
        &[31006, -21266, -3056, -2096, -1440, -987, -679, -464, 31616, -33865, 706, 484, 332, 228, 157, 107],
        &[31006, -19128, -3918, -2627, -1760, -1179, -790, -529, 31616, -33180, 516, 346, 232, 155, 103, 71],
        &[31006, -17612, -4633, -3029, -1982, -1297, -848, -556, 31616, -32084, 162, 106, 69, 46, 29, 19],
        &[31006, -17827, -4891, -3075, -1934, -1217, -765, 31616, -30925, -257, -161, -101, -64, -40],
        &[31006, -18051, -5121, -3097, -1873, -1132, 31616, -29795, -720, -436, -262, -160],
        &[31006, -18935, -5053, -2939, -1707, -994, 31616, -28040, -1498, -869, -507, -293],
        &[31006, -19765, -4958, -2771, -1550, -865, 31616, -26374, -2312, -1293, -722, -403],
        &[31006, -19338, -5833, -2917, -1459, 31616, -24605, -3505, -1753, -876],
        &[31006, -19234, -6505, -2911, 31616, -22745, -4902, -2194],
        &[31006, -19319, -7008, -2806, 31616, -20907, -6421, -2572],
        &[31006, -19652, -7287, 31616, -19006, -8094],
        &[31006, -21225, -5964, -2328, 31616, -18636, -7915, -3089],
        &[31006, -22757, -4743, -2015, 31616, -18415, -7590, -3226],
        &[31006, -24641, -3418, -1582, 31616, -17966, -7329, -3395],
        &[31006, -26482, -2242, -1131, -571, 31616, -17692, -6902, -3480, -1755],
        &[31006, -29004, -877, -493, -277, -156, 31616, -17370, -6243, -3507, -1970, -1107],
        &[31006, -31503, 186, 116, 73, 46, 28, 31616, -17375, -5330, -3335, -2088, -1305, -817],
        &[31006, -36896, 1785, 1244, 867, 604, 421, 294, 205, 31616, -16272, -4649, -3242, -2259, -1573, -1098, -765, -532],
        &[31006, -37737, 1506, 1169, 907, 705, 547, 424, 329, 257, 198, 154, 31616, -23594, -1795, -1393, -1082, -839, -652, -506, -392, -305, -237, -184],
        &[31006, -37961, 1584, 1222, 946, 729, 563, 435, 336, 260, 200, 155, 31616, -26746, -1109, -856, -662, -511, -394, -304, -236, -182, -140, -108],
        &[31006, -37787, 1572, 1206, 927, 713, 547, 421, 323, 248, 192, 145, 31616, -29148, -572, -439, -337, -260, -199, -154, -117, -90, -69, -54],
        &[31006, -37640, 1562, 1196, 912, 699, 534, 407, 312, 239, 182, 139, 31616, -30446, -276, -210, -162, -123, -93, -73, -54, -43, -32, -24],
        &[31006, -37468, 1547, 1178, 895, 680, 518, 394, 299, 228, 173, 31616, -31616, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -37752, 1746, 1294, 958, 712, 527, 390, 290, 214, 159, 31616, -32504, 230, 170, 126, 94, 69, 52, 38, 28, 21],
        &[31006, -37979, 1935, 1399, 1010, 729, 528, 381, 274, 200, 31616, -33484, 518, 375, 270, 196, 141, 103, 73, 53],
        &[31006, -38186, 2123, 1497, 1054, 740, 524, 366, 260, 31616, -34444, 836, 590, 414, 293, 205, 145, 103],
        &[31006, -38337, 2300, 1578, 1084, 743, 509, 351, 31616, -35514, 1223, 839, 576, 396, 270, 187],
        &[31006, -38630, 2569, 1701, 1131, 748, 497, 329, 31616, -36567, 1668, 1105, 734, 486, 323, 214],
        &[31006, -38855, 2818, 1807, 1158, 742, 475, 31616, -37748, 2201, 1413, 903, 581, 371],
        &[31006, -39009, 3046, 1888, 1167, 725, 448, 31616, -39079, 2841, 1759, 1091, 674, 418],
        &[31006, -39083, 3243, 1940, 1163, 695, 31616, -40587, 3602, 2156, 1290, 772],
        &[31006, -38129, 2748, 1690, 1035, 638, 390, 31616, -41981, 4001, 2456, 1508, 927, 568],
        &[31006, -36656, 2090, 1318, 829, 523, 329, 31616, -42705, 4103, 2585, 1628, 1026, 646],
        &[31006, -33959, 1045, 674, 437, 281, 183, 31616, -40981, 3312, 2140, 1384, 894, 578],
        &[31006, -32144, 383, 254, 169, 112, 74, 49, 31616, -39715, 2728, 1809, 1200, 795, 528, 350],
        &[31006, -30283, -234, -157, -108, -72, -49, -34, 31616, -38494, 2221, 1505, 1018, 690, 466, 316],
        &[31006, -28869, -661, -455, -316, -218, -151, -103, -72, 31616, -37487, 1815, 1252, 867, 599, 413, 286, 197],
        &[31006, -27424, -1055, -745, -525, -370, -262, -184, -130, 31616, -36457, 1426, 1007, 709, 501, 353, 249, 175],
        &[31006, -25965, -1412, -1016, -732, -527, -379, -273, -196, -142, 31616, -35414, 1063, 766, 551, 398, 285, 206, 148, 107],
        &[31006, -24053, -2065, -1453, -1020, -717, -505, -354, -249, 31616, -34858, 963, 677, 475, 336, 234, 166, 116],
    ],
    // V = 0.6
    &[
        &[31006, -22106, -2551, -1820, -1299, -925, -661, -472, -335, 31616, -33671, 590, 419, 300, 214, 153, 108, 78],
        &[31006, -20140, -3280, -2289, -1599, -1117, -778, -545, -379, 31616, -33047, 433, 300, 212, 146, 102, 73, 49],
        &[31006, -18741, -3884, -2654, -1814, -1239, -847, -578, 31616, -32044, 135, 93, 63, 44, 29, 21],
        &[31006, -18917, -4115, -2714, -1790, -1182, -778, -515, 31616, -30982, -217, -141, -94, -62, -41, -27],
        &[31006, -19101, -4325, -2754, -1753, -1116, -711, 31616, -29943, -608, -386, -247, -157, -100],
        &[31006, -19895, -4282, -2631, -1618, -994, -612, 31616, -28325, -1268, -779, -480, -295, -180],
        &[31006, -20641, -4216, -2501, -1483, -881, 31616, -26783, -1965, -1167, -692, -410],
        &[31006, -20199, -5004, -2687, -1443, 31616, -25122, -3007, -1615, -867],
        &[31006, -20055, -5629, -2736, -1330, 31616, -23364, -4242, -2061, -1002],
        &[31006, -20088, -6116, -2690, 31616, -21611, -5605, -2465],
        &[31006, -20357, -6410, -2552, 31616, -19789, -7119, -2835],
        &[31006, -21860, -5215, -2242, 31616, -19479, -6920, -2976],
        &[31006, -23317, -4121, -1912, 31616, -19311, -6594, -3061],
        &[31006, -25092, -2951, -1478, -741, 31616, -18934, -6327, -3171, -1588],
        &[31006, -26817, -1923, -1039, -564, 31616, -18724, -5916, -3202, -1732],
        &[31006, -29160, -746, -445, -264, -158, 31616, -18484, -5305, -3161, -1886, -1122],
        &[31006, -31462, 156, 103, 68, 44, 30, 18, 31616, -18549, -4488, -2946, -1934, -1271, -833, -549],
        &[31006, -36385, 1489, 1077, 778, 563, 407, 295, 214, 153, 31616, -17604, -3878, -2805, -2027, -1468, -1061, -767, -555, -402],
        &[31006, -37122, 1244, 990, 789, 629, 500, 400, 318, 253, 202, 160, 129, 102, 31616, -24328, -1481, -1180, -941, -750, -596, -476, -378, -303, -240, -192, -153, -121],
        &[31006, -37327, 1309, 1036, 824, 651, 518, 411, 324, 259, 205, 162, 129, 31616, -27190, -916, -727, -575, -457, -363, -287, -227, -182, -143, -113, -91],
        &[31006, -37170, 1299, 1023, 810, 638, 505, 397, 314, 249, 195, 155, 121, 31616, -29373, -472, -373, -294, -233, -183, -145, -114, -91, -71, -56, -45],
        &[31006, -37038, 1292, 1015, 798, 627, 493, 387, 304, 239, 188, 148, 115, 31616, -30552, -229, -178, -141, -110, -88, -67, -54, -43, -32, -27, -20],
        &[31006, -36883, 1280, 1001, 784, 612, 479, 375, 294, 228, 180, 140, 110, 31616, -31616, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -37148, 1446, 1108, 844, 648, 493, 378, 288, 221, 169, 129, 31616, -32425, 191, 146, 111, 85, 65, 49, 39, 29, 22, 17],
        &[31006, -37363, 1609, 1201, 897, 671, 501, 374, 279, 209, 156, 31616, -33319, 430, 323, 240, 180, 134, 100, 75, 56, 41],
        &[31006, -37560, 1770, 1292, 943, 688, 503, 367, 267, 196, 31616, -34198, 698, 508, 372, 271, 198, 145, 105, 77],
        &[31006, -37705, 1921, 1369, 978, 696, 498, 354, 254, 31616, -35178, 1022, 727, 520, 371, 264, 189, 134],
        &[31006, -37983, 2151, 1487, 1029, 713, 491, 342, 235, 31616, -36147, 1397, 966, 668, 462, 320, 222, 152],
        &[31006, -38200, 2367, 1590, 1065, 715, 479, 322, 31616, -37237, 1850, 1242, 832, 558, 376, 250],
        &[31006, -38352, 2566, 1671, 1086, 707, 460, 31616, -38467, 2395, 1556, 1014, 659, 428],
        &[31006, -38431, 2740, 1729, 1092, 687, 435, 31616, -39863, 3044, 1921, 1211, 765, 481],
        &[31006, -37547, 2318, 1496, 967, 624, 402, 31616, -41134, 3374, 2177, 1406, 908, 585],
        &[31006, -36189, 1760, 1161, 768, 507, 334, 223, 31616, -41787, 3451, 2281, 1506, 996, 657, 435],
        &[31006, -33711, 876, 593, 400, 271, 183, 124, 31616, -40196, 2780, 1878, 1272, 858, 580, 393],
        &[31006, -32048, 322, 221, 154, 107, 73, 51, 35, 31616, -39028, 2285, 1580, 1093, 757, 523, 362, 250],
        &[31006, -30345, -195, -138, -97, -68, -48, -34, -24, 31616, -37905, 1857, 1310, 922, 649, 459, 322, 228],
        &[31006, -29054, -551, -396, -283, -204, -146, -105, -76, -53, 31616, -36979, 1514, 1087, 779, 560, 401, 289, 207, 148],
        &[31006, -27737, -879, -642, -471, -343, -251, -184, -134, -98, 31616, -36034, 1188, 868, 636, 464, 339, 249, 180, 134],
        &[31006, -26410, -1174, -873, -651, -485, -360, -269, -201, -148, -111, 31616, -35079, 884, 658, 491, 365, 272, 202, 151, 113, 83],
        &[31006, -24659, -1722, -1253, -915, -666, -486, -353, -259, -188, 31616, -34575, 801, 586, 427, 309, 228, 164, 121, 87],
    ],
    // V = 0.8
    &[
        &[31006, -22804, -2167, -1595, -1172, -863, -636, -467, -344, -253, 31616, -33509, 499, 369, 271, 198, 148, 107, 80, 58],
        &[31006, -20984, -2790, -2013, -1453, -1049, -756, -546, -394, -284, 31616, -32935, 366, 266, 192, 137, 100, 71, 53, 37],
        &[31006, -19684, -3309, -2343, -1658, -1172, -831, -587, -416, 31616, -32011, 115, 82, 58, 41, 28, 22, 14],
        &[31006, -19830, -3517, -2410, -1652, -1131, -777, -531, 31616, -31030, -185, -126, -86, -60, -41, -27],
        &[31006, -19985, -3707, -2459, -1633, -1084, -718, -478, 31616, -30067, -521, -346, -229, -153, -100, -68],
        &[31006, -20706, -3679, -2366, -1519, -978, -628, 31616, -28565, -1090, -700, -451, -289, -187],
        &[31006, -21385, -3632, -2261, -1407, -877, -545, 31616, -27129, -1695, -1053, -657, -409, -254],
        &[31006, -20936, -4344, -2471, -1405, -798, 31616, -25565, -2611, -1484, -844, -480],
        &[31006, -20765, -4923, -2556, -1329, 31616, -23899, -3709, -1927, -1001],
        &[31006, -20760, -5386, -2556, -1211, 31616, -22227, -4936, -2341, -1111],
        &[31006, -20979, -5683, -2463, 31616, -20480, -6312, -2734],
        &[31006, -22416, -4601, -2136, 31616, -20217, -6105, -2835],
        &[31006, -23804, -3615, -1801, -896, 31616, -20090, -5786, -2881, -1436],
        &[31006, -25482, -2574, -1375, -734, 31616, -19769, -5522, -2947, -1574],
        &[31006, -27104, -1668, -955, -547, -313, 31616, -19607, -5133, -2940, -1683, -962],
        &[31006, -29293, -642, -402, -251, -156, -99, 31616, -19428, -4569, -2857, -1785, -1117, -697],
        &[31006, -31428, 134, 92, 62, 42, 30, 19, 31616, -19534, -3837, -2618, -1786, -1220, -832, -569],
        &[31006, -35960, 1263, 941, 701, 521, 391, 289, 216, 161, 121, 31616, -18711, -3290, -2450, -1826, -1361, -1014, -755, -563, -420, -312],
        &[31006, -36616, 1046, 852, 691, 564, 458, 372, 304, 247, 200, 164, 132, 108, 89, 31616, -24931, -1246, -1014, -825, -672, -545, -445, -361, -294, -240, -194, -158, -129, -105],
        &[31006, -36805, 1101, 892, 723, 584, 476, 383, 312, 252, 204, 166, 133, 110, 87, 31616, -27556, -770, -625, -506, -410, -332, -269, -218, -176, -144, -115, -94, -77, -61],
        &[31006, -36662, 1093, 882, 711, 573, 464, 374, 301, 243, 196, 158, 128, 103, 31616, -29557, -399, -320, -259, -209, -168, -136, -110, -89, -71, -57, -47, -38],
        &[31006, -36542, 1088, 874, 703, 565, 453, 364, 293, 235, 189, 152, 122, 97, 31616, -30640, -191, -155, -124, -99, -81, -63, -52, -42, -33, -26, -23, -16],
        &[31006, -36401, 1078, 864, 690, 553, 442, 353, 283, 227, 180, 145, 117, 92, 31616, -31616, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -36650, 1222, 957, 750, 589, 459, 362, 282, 221, 175, 135, 106, 31616, -32359, 161, 126, 98, 78, 61, 47, 37, 30, 22, 18, 15],
        &[31006, -36853, 1361, 1044, 801, 615, 471, 362, 278, 212, 165, 124, 31616, -33183, 365, 280, 214, 165, 127, 96, 75, 57, 43, 35],
        &[31006, -37040, 1501, 1126, 848, 635, 479, 359, 270, 203, 153, 31616, -33993, 591, 445, 332, 252, 187, 143, 105, 81, 59],
        &[31006, -37179, 1631, 1199, 884, 649, 478, 352, 259, 191, 31616, -34898, 867, 637, 471, 344, 255, 187, 138, 101],
        &[31006, -37443, 1830, 1310, 938, 671, 480, 344, 245, 31616, -35797, 1190, 850, 609, 436, 311, 224, 159],
        &[31006, -37652, 2020, 1407, 979, 682, 473, 330, 229, 31616, -36809, 1580, 1098, 765, 532, 370, 258, 180],
        &[31006, -37801, 2196, 1487, 1005, 681, 462, 311, 31616, -37953, 2049, 1385, 939, 635, 429, 291],
        &[31006, -37883, 2351, 1547, 1019, 669, 442, 290, 31616, -39253, 2610, 1719, 1130, 745, 490, 322],
        &[31006, -37058, 1984, 1334, 897, 602, 405, 272, 31616, -40422, 2887, 1942, 1303, 878, 588, 397],
        &[31006, -35797, 1503, 1032, 708, 485, 333, 230, 31616, -41018, 2949, 2024, 1390, 954, 653, 450],
        &[31006, -33504, 747, 524, 367, 257, 181, 126, 89, 31616, -39540, 2371, 1661, 1165, 816, 571, 402, 280],
        &[31006, -31967, 273, 196, 140, 100, 71, 52, 37, 31616, -38455, 1945, 1392, 996, 713, 510, 364, 262],
        &[31006, -30397, -165, -121, -89, -63, -46, -35, -24, -18, 31616, -37414, 1578, 1150, 836, 608, 443, 322, 234, 172],
        &[31006, -29208, -467, -346, -257, -189, -140, -104, -76, -58, 31616, -36557, 1285, 951, 703, 521, 385, 285, 211, 156],
        &[31006, -27996, -746, -560, -422, -317, -239, -180, -135, -102, -76, 31616, -35683, 1006, 759, 569, 429, 323, 243, 183, 137, 103],
        &[31006, -26778, -993, -760, -582, -444, -340, -261, -199, -152, -117, -90, 31616, -34802, 749, 571, 439, 336, 255, 197, 150, 115, 87, 68],
        &[31006, -25163, -1458, -1095, -821, -617, -462, -347, -261, -195, -146, 31616, -34341, 681, 509, 384, 288, 215, 161, 122, 92, 67],
    ],
    // V = 1.0
    &[
        &[31006, -23332, -1897, -1428, -1075, -809, -609, -459, -345, -260, -196, 31616, -33388, 439, 329, 248, 187, 140, 107, 79, 60, 45],
        &[31006, -21623, -2445, -1809, -1336, -990, -729, -542, -398, -296, 31616, -32851, 321, 239, 176, 130, 96, 71, 53, 38],
        &[31006, -20399, -2904, -2110, -1532, -1113, -806, -588, -425, -309, 31616, -31986, 101, 73, 54, 40, 27, 20, 16, 10],
        &[31006, -20525, -3093, -2180, -1537, -1083, -765, -537, -380, 31616, -31067, -162, -114, -80, -58, -39, -29, -19],
        &[31006, -20659, -3267, -2236, -1529, -1047, -715, -491, 31616, -30162, -459, -314, -215, -147, -101, -69],
        &[31006, -21326, -3249, -2160, -1434, -952, -633, -421, 31616, -28749, -962, -640, -424, -283, -187, -125],
        &[31006, -21955, -3214, -2073, -1337, -863, -554, 31616, -27395, -1500, -966, -623, -402, -260],
        &[31006, -21506, -3866, -2294, -1359, -807, 31616, -25908, -2323, -1378, -817, -484],
        &[31006, -21318, -4406, -2402, -1309, 31616, -24316, -3319, -1811, -987],
        &[31006, -21288, -4846, -2429, -1218, 31616, -22711, -4440, -2227, -1116],
        &[31006, -21471, -5140, -2368, 31616, -21027, -5707, -2631],
        &[31006, -22854, -4143, -2038, -1002, 31616, -20798, -5498, -2704, -1330],
        &[31006, -24184, -3244, -1701, -893, 31616, -20699, -5191, -2722, -1429],
        &[31006, -25784, -2301, -1287, -719, -403, 31616, -20418, -4933, -2760, -1544, -864],
        &[31006, -27326, -1483, -886, -529, -315, 31616, -20289, -4567, -2726, -1626, -971],
        &[31006, -29395, -568, -368, -237, -156, -98, 31616, -20151, -4044, -2617, -1694, -1097, -710],
        &[31006, -31402, 118, 83, 58, 41, 29, 19, 15, 31616, -20284, -3374, -2371, -1664, -1168, -821, -576, -404],
        &[31006, -35639, 1105, 840, 641, 488, 372, 283, 215, 164, 126, 94, 31616, -19547, -2877, -2191, -1668, -1272, -968, -737, -562, -427, -326, -249],
        &[31006, -36237, 910, 751, 621, 512, 424, 350, 289, 239, 198, 162, 135, 111, 93, 75, 31616, -25382, -1084, -896, -739, -611, -505, -417, -345, -284, -236, -194, -160, -133, -109, -91],
        &[31006, -36414, 958, 787, 649, 534, 438, 363, 296, 246, 200, 167, 136, 112, 93, 75, 31616, -27829, -671, -552, -453, -374, -308, -253, -208, -171, -142, -115, -96, -79, -64, -54],
        &[31006, -36281, 950, 780, 638, 525, 429, 352, 288, 238, 192, 160, 131, 106, 87, 73, 31616, -29696, -346, -284, -232, -191, -156, -128, -105, -87, -70, -57, -49, -38, -32, -26],
        &[31006, -36171, 948, 773, 632, 515, 422, 343, 282, 228, 189, 152, 124, 103, 84, 31616, -30705, -168, -135, -113, -90, -74, -61, -49, -41, -33, -27, -22, -18, -15],
        &[31006, -36040, 940, 763, 622, 505, 411, 335, 272, 221, 180, 146, 120, 97, 78, 31616, -31616, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -36276, 1066, 849, 679, 540, 433, 343, 276, 219, 174, 140, 112, 88, 31616, -32310, 141, 111, 90, 71, 56, 46, 37, 28, 23, 18, 15, 12],
        &[31006, -36469, 1188, 930, 727, 569, 446, 348, 273, 214, 167, 130, 103, 31616, -33080, 319, 248, 196, 152, 119, 94, 73, 57, 45, 35, 27],
        &[31006, -36647, 1311, 1006, 773, 593, 455, 350, 267, 207, 157, 122, 31616, -33838, 516, 397, 304, 234, 179, 137, 107, 80, 62, 49],
        &[31006, -36782, 1428, 1075, 808, 610, 458, 346, 259, 196, 147, 31616, -34687, 759, 571, 431, 324, 243, 184, 138, 104, 79],
        &[31006, -37035, 1606, 1178, 864, 635, 464, 342, 251, 183, 31616, -35531, 1042, 766, 561, 412, 302, 221, 163, 120],
        &[31006, -37236, 1776, 1269, 908, 649, 464, 332, 237, 31616, -36484, 1388, 992, 709, 507, 363, 259, 185],
        &[31006, -37382, 1934, 1347, 939, 653, 457, 316, 222, 31616, -37561, 1802, 1257, 875, 610, 425, 296, 206],
        &[31006, -37464, 2073, 1408, 956, 648, 441, 299, 31616, -38788, 2302, 1564, 1061, 720, 490, 332],
        &[31006, -36686, 1748, 1210, 838, 580, 401, 277, 194, 31616, -39880, 2543, 1760, 1220, 843, 584, 404, 281],
        &[31006, -35499, 1322, 933, 658, 466, 327, 231, 164, 31616, -40434, 2595, 1830, 1293, 912, 644, 454, 320],
        &[31006, -33347, 656, 472, 341, 244, 176, 127, 91, 66, 31616, -39042, 2082, 1499, 1077, 777, 558, 402, 290, 207],
        &[31006, -31906, 240, 175, 130, 94, 69, 52, 37, 28, 31616, -38021, 1707, 1250, 919, 674, 493, 364, 265, 195],
        &[31006, -30436, -145, -108, -81, -60, -45, -33, -26, -17, -15, 31616, -37043, 1383, 1031, 767, 574, 425, 318, 237, 177, 131],
        &[31006, -29324, -409, -309, -235, -178, -133, -102, -77, -59, -43, 31616, -36238, 1125, 850, 644, 487, 369, 280, 210, 160, 121],
        &[31006, -28192, -652, -500, -384, -297, -226, -175, -135, -102, -80, -61, 31616, -35419, 881, 676, 520, 399, 307, 237, 180, 141, 106, 82],
        &[31006, -27056, -866, -677, -529, -411, -323, -251, -195, -154, -119, -94, -72, 31616, -34593, 654, 509, 398, 311, 243, 189, 147, 116, 90, 70, 55],
        &[31006, -25542, -1276, -977, -750, -574, -441, -338, -258, -198, -153, -116, 31616, -34164, 595, 456, 349, 269, 204, 158, 121, 92, 71, 55],
    ],
    // V = 2.0
    &[
        &[31006, -25189, -1091, -884, -721, -584, -475, -387, -313, -256, -207, -168, -137, -112, -90, 31616, -32959, 252, 204, 166, 136, 109, 89, 73, 58, 49, 38, 32, 25, 22],
        &[31006, -23878, -1411, -1132, -908, -728, -584, -468, -376, -301, -242, -193, -156, -124, 31616, -32554, 185, 149, 120, 96, 77, 61, 50, 39, 32, 26, 20, 17],
        &[31006, -22930, -1684, -1333, -1055, -834, -662, -523, -413, -329, -258, -206, -162, 31616, -31898, 59, 46, 37, 30, 22, 19, 14, 11, 10, 7, 5],
        &[31006, -22997, -1806, -1399, -1083, -840, -649, -503, -390, -302, -234, -181, 31616, -31196, -95, -73, -57, -44, -34, -27, -20, -15, -13, -10],
        &[31006, -23072, -1920, -1457, -1103, -836, -635, -479, -364, -277, -208, 31616, -30501, -270, -204, -156, -117, -89, -68, -51, -38, -30],
        &[31006, -23556, -1925, -1428, -1058, -786, -582, -431, -321, -237, -176, 31616, -29409, -571, -422, -314, -232, -173, -128, -95, -70, -52],
        &[31006, -24016, -1917, -1392, -1009, -733, -532, -386, -280, -203, 31616, -28356, -895, -648, -471, -342, -248, -180, -131, -94],
        &[31006, -23597, -2352, -1606, -1095, -747, -512, -347, 31616, -27164, -1414, -964, -658, -450, -306, -210],
        &[31006, -23379, -2731, -1752, -1126, -723, -463, 31616, -25869, -2057, -1321, -849, -543, -351],
        &[31006, -23285, -3058, -1848, -1115, -674, 31616, -24541, -2803, -1692, -1022, -618],
        &[31006, -23362, -3303, -1876, -1065, -605, 31616, -23127, -3668, -2083, -1183, -672],
        &[31006, -24516, -2625, -1565, -930, -555, 31616, -23003, -3485, -2075, -1236, -735],
        &[31006, -25613, -2027, -1265, -790, -493, -307, 31616, -22985, -3244, -2026, -1263, -788, -493],
        &[31006, -26907, -1418, -926, -608, -396, -260, -169, 31616, -22826, -3040, -1988, -1300, -852, -557, -364],
        &[31006, -28138, -901, -618, -424, -291, -199, -136, 31616, -22789, -2774, -1901, -1306, -893, -614, -421],
        &[31006, -29762, -339, -246, -180, -130, -95, -69, -51, -36, 31616, -22766, -2410, -1752, -1277, -928, -677, -491, -358, -260],
        &[31006, -31309, 70, 52, 42, 31, 25, 19, 14, 12, 9, 6, 31616, -22953, -1972, -1524, -1176, -909, -701, -543, -418, -323, -251, -192],
        &[31006, -34513, 633, 519, 425, 347, 287, 233, 192, 157, 129, 105, 87, 71, 58, 48, 31616, -22481, -1648, -1351, -1107, -907, -744, -610, -499, -409, -336, -275, -225, -185, -151, -124],
        &[31006, -34925, 511, 443, 387, 336, 291, 255, 220, 193, 167, 146, 125, 111, 95, 84, 72, 63, 54, 48, 42, 36, 31616, -26946, -608, -529, -460, -401, -347, -304, -262, -230, -199, -173, -151, -131, -114, -99, -86, -76, -64, -57, -50, -42],
        &[31006, -35060, 539, 466, 404, 352, 304, 264, 228, 200, 171, 150, 130, 112, 97, 85, 73, 63, 56, 48, 41, 36, 31616, -28778, -376, -327, -283, -246, -214, -184, -160, -139, -121, -105, -90, -79, -68, -60, -50, -45, -39, -33, -30, -24],
        &[31006, -34962, 534, 463, 400, 346, 299, 259, 223, 194, 167, 145, 125, 109, 93, 80, 71, 61, 52, 45, 39, 31616, -30176, -195, -168, -145, -127, -108, -95, -81, -70, -61, -53, -46, -39, -34, -29, -26, -22, -19, -16, -15],
        &[31006, -34881, 533, 460, 397, 341, 296, 254, 219, 190, 162, 141, 122, 104, 91, 77, 67, 59, 49, 43, 38, 31616, -30933, -93, -82, -70, -60, -52, -45, -39, -33, -28, -26, -21, -18, -16, -14, -12, -10, -9, -8, -6],
        &[31006, -34785, 530, 455, 391, 336, 290, 249, 214, 183, 160, 135, 117, 101, 86, 75, 64, 55, 47, 41, 31616, -31616, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -34972, 604, 511, 434, 368, 311, 265, 223, 191, 161, 137, 115, 99, 82, 72, 59, 51, 43, 31616, -32138, 79, 68, 57, 48, 41, 35, 30, 24, 22, 18, 15, 13, 11, 9, 8, 7, 5],
        &[31006, -35127, 676, 565, 473, 394, 331, 275, 232, 192, 161, 135, 113, 94, 78, 67, 54, 31616, -32720, 181, 151, 127, 106, 88, 74, 62, 52, 42, 37, 31, 24, 21, 18, 15],
        &[31006, -35272, 750, 618, 510, 419, 346, 286, 234, 194, 161, 130, 109, 90, 73, 62, 31616, -33296, 295, 243, 201, 166, 135, 114, 91, 77, 63, 52, 43, 35, 28, 25],
        &[31006, -35384, 820, 667, 542, 439, 359, 290, 236, 192, 156, 127, 104, 82, 69, 31616, -33944, 437, 353, 289, 234, 190, 154, 126, 103, 82, 67, 56, 44, 36],
        &[31006, -35590, 928, 741, 590, 471, 375, 300, 238, 192, 151, 121, 96, 78, 31616, -34593, 603, 481, 383, 306, 243, 196, 154, 124, 99, 78, 63, 50],
        &[31006, -35758, 1033, 808, 634, 494, 388, 304, 237, 185, 146, 113, 90, 31616, -35329, 807, 633, 493, 388, 302, 237, 186, 144, 114, 90, 68],
        &[31006, -35884, 1131, 870, 668, 512, 394, 302, 233, 178, 136, 106, 31616, -36165, 1055, 811, 623, 478, 367, 281, 218, 166, 127, 98],
        &[31006, -35963, 1222, 920, 693, 524, 393, 297, 224, 168, 127, 31616, -37121, 1356, 1023, 770, 580, 438, 330, 248, 187, 142],
        &[31006, -35355, 1024, 784, 599, 457, 351, 266, 205, 157, 118, 92, 31616, -37945, 1492, 1140, 871, 666, 509, 389, 298, 226, 175, 132],
        &[31006, -34438, 771, 598, 464, 359, 279, 216, 167, 130, 101, 78, 31616, -38353, 1515, 1173, 911, 705, 547, 423, 330, 254, 198, 152],
        &[31006, -32791, 382, 300, 235, 186, 146, 114, 91, 70, 56, 44, 34, 31616, -37276, 1209, 952, 748, 587, 463, 364, 285, 225, 177, 139, 109],
        &[31006, -31690, 138, 110, 89, 71, 55, 45, 35, 29, 23, 18, 14, 12, 31616, -36486, 986, 787, 627, 500, 400, 317, 254, 202, 162, 129, 101, 83],
        &[31006, -30573, -84, -67, -55, -44, -35, -29, -23, -18, -16, -11, -11, -7, 31616, -35735, 797, 642, 519, 418, 337, 272, 220, 176, 143, 115, 93, 75],
        &[31006, -29732, -234, -192, -157, -126, -105, -85, -69, -56, -46, -38, -30, -25, -21, 31616, -35117, 645, 526, 430, 350, 285, 234, 190, 154, 127, 104, 83, 69, 56],
        &[31006, -28879, -372, -307, -253, -209, -173, -143, -116, -98, -79, -66, -55, -44, -38, -30, 31616, -34491, 503, 415, 343, 282, 233, 193, 158, 131, 108, 89, 73, 61, 51, 40],
        &[31006, -28025, -494, -411, -345, -286, -239, -200, -167, -138, -117, -96, -82, -66, -57, -46, -40, 31616, -33862, 371, 312, 258, 216, 180, 151, 126, 104, 88, 72, 61, 52, 41, 36, 29],
        &[31006, -26874, -729, -601, -495, -407, -336, -275, -228, -188, -153, -128, -104, -87, -70, -59, 31616, -33543, 340, 281, 230, 190, 156, 130, 105, 88, 71, 60, 49, 39, 34, 27],
    ],
    // V = 3.0
    &[
        &[31006, -26421, -677, -577, -492, -419, -358, -304, -260, -221, -188, -162, -136, -117, -100, -85, -71, -63, -52, 31616, -32675, 157, 133, 114, 96, 83, 70, 60, 51, 44, 37, 31, 28, 22, 20, 17, 14, 12],
        &[31006, -25379, -879, -743, -625, -529, -445, -377, -317, -267, -226, -191, -160, -136, -115, -96, -81, -69, 31616, -32357, 116, 98, 82, 69, 60, 49, 41, 36, 30, 24, 22, 18, 14, 14, 10, 9],
        &[31006, -24621, -1053, -879, -734, -613, -512, -428, -357, -298, -249, -208, -174, -145, -121, -101, -85, 31616, -31839, 37, 30, 26, 22, 17, 16, 12, 10, 9, 7, 6, 6, 3, 4, 3],
        &[31006, -24660, -1134, -931, -765, -628, -517, -423, -348, -286, -235, -192, -159, -130, -107, -88, 31616, -31283, -60, -49, -40, -32, -28, -22, -18, -15, -13, -9, -9, -7, -5, -5],
        &[31006, -24704, -1213, -978, -790, -639, -516, -416, -337, -271, -220, -178, -142, -116, -94, 31616, -30730, -171, -137, -112, -89, -72, -59, -48, -37, -32, -24, -20, -17, -13],
        &[31006, -25076, -1219, -970, -769, -611, -486, -385, -307, -243, -194, -153, -121, -98, 31616, -29859, -362, -287, -227, -182, -144, -113, -92, -72, -56, -47, -35, -29],
        &[31006, -25429, -1221, -952, -746, -581, -455, -355, -277, -217, -169, -132, -103, 31616, -29015, -570, -444, -347, -272, -212, -165, -129, -101, -80, -61, -48],
        &[31006, -25058, -1515, -1131, -841, -627, -467, -349, -260, -192, -145, 31616, -28042, -911, -678, -506, -378, -280, -209, -156, -116, -87],
        &[31006, -24845, -1781, -1267, -901, -639, -456, -322, -230, 31616, -26973, -1343, -954, -679, -482, -343, -243, -173],
        &[31006, -24730, -2021, -1371, -928, -630, -427, -289, 31616, -25865, -1853, -1254, -852, -577, -391, -265],
        &[31006, -24757, -2207, -1428, -923, -598, -386, 31616, -24675, -2452, -1586, -1026, -663, -428],
        &[31006, -25723, -1741, -1166, -782, -526, -351, -236, 31616, -24606, -2308, -1549, -1039, -696, -467, -313],
        &[31006, -26637, -1330, -926, -643, -448, -311, -217, -150, 31616, -24624, -2129, -1481, -1030, -716, -498, -347, -241],
        &[31006, -27701, -921, -666, -478, -346, -249, -180, -130, -93, 31616, -24528, -1977, -1425, -1027, -742, -534, -386, -278, -201],
        &[31006, -28704, -581, -434, -324, -243, -182, -135, -102, -76, -57, 31616, -24533, -1785, -1337, -998, -747, -559, -418, -312, -234, -175],
        &[31006, -30014, -215, -169, -132, -104, -80, -64, -49, -39, -30, -25, -17, 31616, -24557, -1533, -1200, -940, -734, -577, -450, -352, -277, -217, -168, -133],
        &[31006, -31246, 44, 35, 29, 23, 21, 15, 14, 10, 9, 7, 6, 5, 4, 3, 31616, -24749, -1240, -1015, -832, -683, -558, -459, -375, -308, -252, -206, -170, -139, -113, -94],
        &[31006, -33768, 393, 336, 289, 248, 213, 182, 156, 135, 115, 98, 85, 73, 63, 53, 46, 39, 34, 29, 31616, -24421, -1023, -877, -752, -645, -555, -475, -407, -350, -299, -259, -220, -189, -163, -139, -120, -103, -87, -76],
        &[31006, -34073, 313, 281, 252, 226, 204, 182, 164, 147, 133, 118, 108, 94, 87, 78, 68, 63, 56, 50, 45, 41, 36, 33, 30, 25, 31616, -27961, -373, -335, -300, -269, -243, -218, -195, -176, -157, -142, -126, -115, -103, -92, -82, -75, -66, -60, -54, -49, -42, -40, -35, -31],
        &[31006, -34179, 330, 295, 264, 238, 213, 190, 170, 154, 136, 124, 109, 99, 89, 79, 70, 65, 56, 52, 45, 41, 37, 33, 29, 27, 31616, -29394, -231, -207, -185, -167, -148, -133, -120, -107, -97, -85, -77, -69, -62, -56, -49, -45, -40, -35, -33, -28, -26, -23, -21, -18],
        &[31006, -34104, 328, 294, 261, 235, 209, 188, 167, 150, 134, 120, 107, 96, 85, 77, 69, 60, 56, 48, 44, 40, 34, 32, 27, 26, 31616, -30489, -118, -108, -95, -85, -77, -67, -62, -54, -49, -44, -39, -34, -32, -27, -26, -21, -21, -17, -17, -13, -14, -11, -10, -9],
        &[31006, -34041, 327, 292, 260, 233, 207, 185, 164, 149, 130, 118, 104, 94, 83, 74, 66, 60, 52, 47, 42, 38, 34, 29, 26, 25, 31616, -31081, -57, -52, -46, -41, -36, -33, -30, -25, -23, -21, -18, -17, -14, -14, -11, -11, -9, -8, -8, -6, -7, -4, -5, -4],
        &[31006, -33966, 324, 289, 258, 230, 203, 182, 162, 143, 129, 114, 102, 90, 80, 73, 63, 57, 50, 46, 39, 37, 31, 28, 26, 22, 31616, -31616, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -34118, 372, 327, 288, 253, 224, 197, 173, 152, 135, 118, 104, 92, 81, 71, 63, 55, 48, 44, 37, 33, 29, 26, 31616, -32026, 50, 42, 38, 34, 29, 26, 22, 21, 18, 15, 14, 11, 12, 9, 8, 7, 7, 6, 4, 5, 3, 4],
        &[31006, -34245, 418, 364, 316, 276, 241, 209, 183, 158, 139, 120, 105, 92, 80, 69, 60, 53, 46, 40, 35, 30, 31616, -32484, 112, 98, 84, 75, 63, 57, 49, 42, 38, 31, 29, 25, 20, 20, 15, 15, 12, 10, 10, 8],
        &[31006, -34364, 465, 400, 345, 297, 257, 220, 190, 163, 142, 122, 104, 91, 77, 68, 57, 50, 43, 37, 32, 31616, -32939, 184, 157, 136, 117, 100, 88, 75, 64, 56, 47, 42, 36, 30, 26, 24, 18, 18, 15, 11],
        &[31006, -34457, 509, 435, 370, 316, 269, 229, 195, 167, 142, 121, 103, 88, 74, 65, 54, 46, 40, 31616, -33451, 271, 231, 197, 167, 144, 122, 103, 89, 75, 65, 55, 46, 40, 34, 29, 25, 21],
        &[31006, -34627, 579, 487, 408, 344, 289, 241, 205, 170, 144, 120, 102, 85, 71, 61, 50, 42, 31616, -33968, 377, 316, 265, 223, 187, 158, 132, 111, 93, 79, 65, 56, 46, 39, 33, 27],
        &[31006, -34768, 648, 536, 443, 368, 304, 252, 208, 173, 143, 117, 99, 81, 67, 56, 31616, -34555, 506, 419, 346, 287, 238, 197, 162, 136, 111, 92, 77, 63, 53, 43],
        &[31006, -34875, 712, 581, 474, 387, 315, 258, 211, 170, 141, 114, 93, 76, 62, 31616, -35224, 664, 542, 442, 360, 295, 240, 197, 159, 130, 107, 87, 71, 57],
        &[31006, -34945, 771, 621, 498, 402, 322, 259, 209, 168, 135, 108, 88, 70, 31616, -35991, 857, 689, 554, 445, 358, 289, 231, 187, 149, 122, 95, 79],
        &[31006, -34457, 645, 525, 426, 347, 282, 229, 187, 151, 124, 99, 82, 67, 53, 31616, -36638, 940, 762, 622, 504, 410, 334, 271, 221, 178, 147, 118, 96, 78],
        &[31006, -33726, 485, 398, 327, 269, 221, 181, 150, 123, 100, 84, 31616, -36953, 950, 781, 642, 529, 433, 356, 294, 240, 198, 164],
        &[31006, -32418, 239, 198, 165, 137, 114, 94, 79, 65, 55, 44, 38, 31, 26, 22, 17, 31616, -36094, 757, 630, 522, 434, 362, 299, 249, 208, 171, 144, 118, 99, 82, 68, 57],
        &[31006, -31547, 87, 73, 60, 52, 43, 36, 30, 26, 22, 17, 16, 12, 11, 9, 7, 7, 31616, -35463, 616, 516, 435, 364, 307, 258, 215, 182, 153, 128, 108, 90, 76, 64, 54, 44],
        &[31006, -30664, -53, -44, -37, -32, -27, -22, -20, -16, -14, -12, -10, -8, -7, -7, -4, -5, -4, 31616, -34866, 496, 421, 356, 301, 256, 217, 184, 155, 132, 112, 94, 80, 69, 57, 49, 42, 34],
        &[31006, -30002, -146, -124, -107, -91, -77, -68, -56, -49, -41, -36, -30, -26, -23, -18, -17, -13, -12, -11, 31616, -34375, 401, 342, 293, 250, 214, 183, 156, 134, 114, 97, 84, 71, 61, 52, 45, 38, 33, 27],
        &[31006, -29332, -230, -199, -172, -147, -128, -110, -94, -83, -69, -62, -52, -45, -39, -34, -28, -26, -21, -19, -16, 31616, -33879, 312, 269, 231, 200, 173, 148, 128, 110, 96, 82, 70, 62, 52, 46, 39, 34, 29, 24, 23],
        &[31006, -28663, -305, -265, -231, -200, -176, -151, -132, -115, -100, -87, -76, -65, -58, -50, -42, -39, -32, -28, -26, -21, 31616, -33382, 230, 200, 174, 152, 130, 116, 98, 88, 75, 65, 57, 50, 43, 37, 33, 29, 24, 21, 19, 17],
        &[31006, -27753, -452, -390, -334, -290, -247, -215, -184, -158, -137, -117, -102, -87, -75, -65, -55, -48, -42, -35, -30, 31616, -33133, 211, 182, 155, 136, 115, 100, 86, 73, 65, 54, 48, 40, 35, 30, 27, 21, 20, 16, 15],
    ],
    // V = 4.0
    &[
        &[31006, -27219, -462, -406, -355, -314, -273, -242, -212, -185, -164, -142, -127, -110, -97, -85, -75, -65, -58, -51, -44, -39, -35, 31616, -32490, 106, 94, 82, 73, 62, 57, 48, 43, 38, 33, 29, 25, 23, 20, 17, 14, 15, 11, 10, 9, 8],
        &[31006, -26354, -602, -523, -455, -398, -345, -301, -262, -228, -199, -173, -150, -132, -114, -99, -88, -74, -66, -58, 31616, -32228, 78, 70, 60, 52, 45, 40, 34, 31, 26, 22, 20, 18, 15, 12, 13, 9, 8, 9],
        &[31006, -25724, -720, -622, -538, -463, -402, -345, -300, -257, -224, -192, -166, -144, -124, -106, -94, -79, -69, -60, -51, 31616, -31800, 24, 23, 18, 16, 15, 11, 11, 9, 8, 6, 6, 6, 3, 4, 4, 2, 3, 2, 2],
        &[31006, -25748, -778, -664, -564, -482, -410, -350, -297, -253, -217, -184, -157, -133, -114, -97, -83, -70, -60, 31616, -31340, -42, -34, -29, -26, -21, -19, -15, -14, -11, -9, -9, -7, -5, -6, -4, -4, -3],
        &[31006, -25777, -835, -700, -590, -496, -415, -350, -295, -246, -208, -175, -146, -124, -103, -87, -74, -61, 31616, -30881, -118, -97, -84, -70, -57, -50, -42, -34, -29, -25, -20, -18, -14, -13, -10, -8],
        &[31006, -26078, -843, -697, -580, -479, -399, -329, -275, -225, -189, -156, -129, -107, -89, -74, 31616, -30156, -250, -207, -171, -142, -118, -98, -81, -67, -56, -46, -38, -32, -27, -21],
        &[31006, -26365, -845, -692, -564, -464, -377, -310, -252, -208, -169, -138, -114, -92, -76, 31616, -29452, -394, -322, -264, -216, -176, -144, -118, -97, -78, -65, -53, -43, -36],
        &[31006, -26036, -1058, -834, -654, -517, -406, -320, -251, -198, -156, -123, -96, 31616, -28630, -635, -501, -394, -311, -243, -192, -151, -119, -94, -74, -58],
        &[31006, -25837, -1255, -949, -719, -546, -412, -312, -237, -180, -135, 31616, -27721, -945, -716, -542, -410, -312, -235, -178, -135, -103],
        &[31006, -25721, -1433, -1045, -761, -554, -406, -293, -216, -156, 31616, -26773, -1314, -956, -698, -509, -370, -270, -197, -143],
        &[31006, -25723, -1577, -1108, -775, -545, -381, -268, -188, 31616, -25748, -1753, -1229, -862, -604, -424, -298, -208],
        &[31006, -26553, -1237, -892, -645, -467, -336, -243, -176, -127, 31616, -25707, -1641, -1184, -856, -619, -447, -322, -233, -169],
        &[31006, -27334, -940, -699, -520, -388, -287, -215, -160, -118, -88, 31616, -25740, -1503, -1120, -832, -620, -461, -343, -255, -190, -141],
        &[31006, -28237, -647, -495, -381, -290, -224, -171, -131, -101, -76, -60, 31616, -25678, -1387, -1063, -815, -624, -479, -367, -280, -217, -164, -127],
        &[31006, -29084, -404, -320, -252, -200, -157, -124, -97, -79, -60, -48, -39, 31616, -25699, -1247, -983, -777, -612, -485, -381, -302, -238, -188, -148, -117],
        &[31006, -30181, -148, -123, -100, -82, -68, -54, -45, -38, -29, -26, -19, -18, -13, -11, 31616, -25743, -1061, -870, -711, -585, -477, -392, -321, -263, -216, -176, -145, -119, -96, -80],
        &[31006, -31205, 30, 26, 20, 19, 16, 13, 11, 9, 9, 7, 5, 6, 4, 3, 4, 2, 2, 31616, -25925, -852, -723, -616, -523, -446, -378, -322, -274, -233, -197, -170, -142, -123, -103, -88, -75, -63],
        &[31006, -33286, 268, 236, 208, 184, 163, 142, 127, 112, 98, 88, 76, 68, 59, 54, 46, 41, 37, 31, 29, 25, 22, 20, 16, 31616, -25678, -696, -614, -544, -479, -422, -374, -329, -291, -257, -226, -201, -176, -156, -137, -122, -107, -95, -83, -74, -66, -56, -51, -46],
        &[31006, -33527, 212, 193, 177, 163, 148, 137, 125, 114, 105, 96, 89, 80, 73, 69, 62, 56, 53, 47, 44, 40, 36, 35, 30, 28, 31616, -28612, -251, -232, -210, -194, -178, -161, -150, -137, -124, -115, -104, -97, -88, -80, -75, -67, -63, -56, -52, -48, -44, -40, -36, -34],
        &[31006, -33615, 223, 204, 186, 171, 156, 142, 130, 120, 109, 100, 91, 83, 77, 69, 65, 57, 54, 49, 45, 41, 36, 35, 32, 28, 31616, -29789, -157, -142, -130, -120, -109, -100, -91, -84, -76, -70, -64, -58, -54, -48, -46, -40, -37, -35, -31, -29, -26, -24, -21, -21],
        &[31006, -33553, 221, 203, 184, 169, 155, 139, 130, 116, 108, 97, 89, 82, 74, 68, 62, 56, 53, 46, 43, 40, 36, 32, 30, 28, 31616, -30689, -80, -75, -66, -62, -56, -51, -47, -42, -40, -35, -32, -30, -27, -25, -22, -21, -19, -17, -16, -14, -13, -12, -10, -11],
        &[31006, -33502, 221, 201, 185, 166, 154, 139, 126, 116, 106, 95, 88, 79, 73, 67, 59, 56, 50, 45, 43, 37, 34, 32, 29, 26, 31616, -31176, -39, -35, -33, -29, -27, -25, -22, -21, -18, -17, -16, -13, -13, -12, -11, -9, -9, -9, -6, -7, -7, -5, -5, -4],
        &[31006, -33441, 219, 200, 183, 164, 152, 136, 125, 114, 102, 94, 86, 77, 71, 65, 57, 54, 49, 43, 40, 37, 33, 30, 28, 24, 31616, -31616, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -33568, 251, 228, 204, 185, 166, 151, 135, 122, 111, 98, 90, 81, 72, 66, 59, 54, 48, 43, 39, 35, 33, 28, 25, 31616, -31953, 32, 31, 27, 24, 22, 19, 19, 15, 16, 12, 12, 10, 10, 9, 8, 6, 7, 6, 4, 6, 3, 5, 2],
        &[31006, -33676, 285, 252, 228, 201, 182, 162, 144, 129, 116, 102, 94, 81, 75, 65, 59, 52, 48, 41, 39, 32, 31, 27, 31616, -32331, 75, 69, 60, 55, 48, 44, 38, 35, 30, 29, 24, 22, 20, 18, 15, 14, 13, 12, 9, 10, 7, 8],
        &[31006, -33776, 316, 280, 248, 220, 195, 172, 153, 135, 121, 105, 95, 83, 74, 65, 59, 50, 46, 41, 35, 31, 29, 31616, -32707, 124, 111, 97, 87, 77, 67, 61, 53, 48, 41, 37, 34, 28, 26, 23, 20, 18, 16, 14, 12, 11],
        &[31006, -33856, 347, 306, 268, 234, 208, 181, 159, 141, 122, 107, 96, 82, 74, 64, 56, 49, 44, 38, 33, 29, 31616, -33131, 184, 163, 142, 125, 110, 97, 84, 75, 65, 57, 51, 43, 40, 34, 29, 27, 23, 20, 18, 16],
        &[31006, -34000, 395, 345, 297, 260, 224, 195, 169, 146, 128, 111, 95, 84, 71, 64, 53, 48, 41, 35, 31, 31616, -33561, 258, 223, 193, 169, 145, 127, 110, 95, 83, 72, 61, 55, 47, 40, 36, 30, 26, 24, 20],
        &[31006, -34120, 443, 381, 326, 280, 240, 206, 176, 151, 130, 112, 95, 81, 71, 60, 52, 44, 37, 31616, -34049, 346, 298, 255, 218, 188, 160, 139, 117, 102, 87, 75, 63, 55, 47, 41, 34, 29],
        &[31006, -34214, 490, 415, 351, 297, 254, 213, 181, 154, 130, 110, 94, 79, 67, 57, 49, 31616, -34607, 456, 387, 328, 277, 236, 199, 169, 144, 121, 102, 88, 74, 62, 54, 44],
        &[31006, -34276, 532, 445, 372, 313, 261, 219, 183, 154, 129, 107, 90, 76, 63, 31616, -35247, 589, 496, 413, 346, 291, 244, 202, 172, 142, 120, 100, 84, 70],
        &[31006, -33868, 443, 376, 317, 267, 227, 190, 162, 137, 115, 97, 83, 31616, -35780, 645, 546, 461, 389, 330, 278, 235, 198, 168, 142, 119],
        &[31006, -33259, 332, 284, 241, 206, 176, 149, 128, 109, 31616, -36038, 652, 557, 473, 405, 345, 293, 250, 214],
        &[31006, -32175, 164, 141, 120, 105, 89, 77, 66, 58, 48, 42, 36, 32, 26, 24, 31616, -35322, 518, 446, 384, 330, 284, 244, 210, 181, 155, 133, 115, 99, 85, 73],
        &[31006, -31453, 59, 51, 45, 39, 33, 29, 26, 21, 19, 17, 14, 13, 10, 10, 7, 8, 6, 6, 3, 5, 31616, -34797, 421, 364, 318, 275, 238, 207, 180, 156, 135, 117, 102, 89, 76, 66, 59, 49, 44, 38, 32, 29],
        &[31006, -30724, -35, -32, -26, -25, -20, -18, -16, -14, -12, -11, -9, -8, -7, -6, -6, -4, -5, -3, -3, -3, -2, 31616, -34301, 338, 296, 259, 226, 198, 172, 151, 131, 116, 101, 87, 78, 66, 59, 52, 44, 40, 34, 29, 27, 23],
        &[31006, -30177, -99, -88, -77, -67, -61, -51, -47, -41, -35, -32, -27, -25, -22, -18, -17, -15, -12, -12, -10, -8, -8, -7, 31616, -33894, 273, 241, 211, 186, 165, 143, 127, 112, 99, 85, 77, 67, 59, 52, 46, 40, 35, 31, 28, 24, 21, 19],
        &[31006, -29625, -156, -140, -123, -109, -98, -85, -76, -68, -59, -54, -46, -42, -37, -33, -29, -25, -24, -19, -18, -17, -13, -13, -10, 31616, -33483, 213, 187, 167, 148, 130, 117, 102, 92, 81, 71, 64, 56, 49, 46, 38, 35, 31, 27, 24, 22, 18, 18, 14],
        &[31006, -29074, -208, -185, -164, -149, -131, -117, -105, -94, -84, -74, -67, -59, -54, -47, -42, -38, -33, -31, -26, -25, -21, -19, -17, -15, 31616, -33072, 157, 139, 124, 112, 99, 88, 80, 70, 63, 56, 50, 45, 41, 35, 31, 30, 24, 24, 19, 19, 16, 14, 13, 12],
        &[31006, -28322, -308, -272, -242, -213, -189, -167, -149, -131, -116, -103, -91, -81, -71, -63, -56, -50, -44, -38, -35, -30, -27, -24, -21, 31616, -32868, 144, 127, 113, 99, 88, 79, 68, 62, 53, 49, 42, 38, 33, 30, 25, 24, 20, 19, 15, 14, 13, 11, 10],
    ],
    // V = 5.0
    &[
        &[31006, -27772, -337, -301, -271, -242, -218, -193, -175, -155, -140, -126, -111, -102, -89, -80, 31616, -32363, 78, 70, 63, 55, 50, 45, 40, 37, 31, 30, 25, 23, 22, 18],
        &[31006, -27031, -439, -390, -348, -309, -274, -245, -218, -193, -172, -153, -137, -120, 31616, -32139, 57, 52, 46, 40, 36, 33, 28, 26, 22, 21, 18, 15],
        &[31006, -26489, -527, -466, -410, -363, -322, -282, -251, -221, -196, -172, -152, -135, -119, 31616, -31774, 19, 16, 14, 13, 11, 10, 9, 8, 6, 6, 6, 4, 5],
        &[31006, -26505, -571, -498, -435, -379, -332, -290, -253, -221, -192, -169, -148, -127, -113, -98, -85, -75, -66, -56, -50, -44, -37, 31616, -31380, -30, -26, -23, -20, -17, -16, -12, -12, -11, -8, -8, -6, -7, -5, -4, -4, -3, -4, -2, -2, -2],
        &[31006, -26526, -613, -528, -456, -395, -340, -293, -254, -219, -189, -163, -141, -121, -106, -89, -79, -68, -58, -50, -44, 31616, -30986, -87, -74, -64, -55, -48, -41, -36, -31, -26, -24, -19, -17, -15, -12, -12, -9, -8, -7, -7],
        &[31006, -26780, -619, -529, -451, -385, -329, -280, -240, -203, -176, -147, -128, -108, -93, -78, -68, -58, -48, 31616, -30364, -184, -156, -134, -114, -97, -83, -72, -59, -53, -43, -38, -32, -28, -23, -20, -17, -14],
        &[31006, -27022, -623, -525, -443, -375, -315, -266, -225, -190, -159, -135, -114, -96, -81, -68, -58, -49, 31616, -29758, -291, -244, -208, -174, -146, -126, -103, -90, -73, -64, -52, -46, -37, -32, -27, -23],
        &[31006, -26728, -783, -642, -522, -428, -348, -286, -232, -191, -154, -127, -104, -84, -70, 31616, -29045, -472, -384, -315, -256, -210, -171, -140, -115, -92, -77, -62, -50, -43],
        &[31006, -26544, -935, -739, -583, -462, -366, -287, -229, -180, -143, -113, -88, 31616, -28254, -704, -557, -440, -347, -276, -217, -172, -136, -108, -84, -68],
        &[31006, -26432, -1073, -822, -629, -480, -370, -281, -215, -166, -126, -97, 31616, -27424, -985, -752, -576, -441, -338, -258, -197, -152, -116, -88],
        &[31006, -26421, -1188, -881, -652, -483, -358, -265, -196, -146, 31616, -26524, -1319, -979, -723, -538, -396, -296, -217, -162],
        &[31006, -27150, -926, -706, -534, -406, -309, -234, -179, -134, -104, 31616, -26498, -1231, -935, -709, -540, -409, -311, -236, -180, -137],
        &[31006, -27832, -703, -546, -426, -331, -259, -201, -156, -123, -94, -75, 31616, -26537, -1124, -874, -682, -531, -413, -322, -250, -196, -151, -119],
        &[31006, -28618, -481, -384, -307, -245, -195, -157, -125, -99, -80, -63, -51, -41, 31616, -26494, -1033, -823, -658, -526, -419, -335, -268, -213, -171, -137, -107, -88],
        &[31006, -29351, -301, -245, -201, -164, -135, -111, -90, -74, -61, -49, -40, -34, -27, 31616, -26524, -922, -757, -618, -507, -415, -339, -278, -228, -186, -153, -125, -102, -84],
        &[31006, -30298, -109, -93, -79, -66, -56, -47, -40, -34, -28, -25, -20, -17, -15, -12, -11, -8, 31616, -26575, -782, -660, -558, -472, -398, -337, -284, -240, -204, -171, -145, -123, -103, -88, -73, -63],
        &[31006, -31176, 22, 18, 17, 15, 12, 12, 8, 10, 6, 7, 5, 5, 4, 4, 4, 2, 2, 3, 1, 2, 31616, -26745, -623, -544, -474, -414, -360, -315, -274, -239, -209, -181, -158, -139, -120, -106, -91, -80, -69, -62, -52, -46],
        &[31006, -32952, 195, 175, 158, 142, 127, 116, 103, 94, 83, 75, 68, 62, 54, 49, 46, 39, 36, 33, 28, 28, 22, 22, 19, 18, 31616, -26546, -508, -457, -411, -370, -332, -300, -270, -242, -219, -195, -178, -158, -144, -129, -115, -105, -93, -85, -76, -69, -61, -55, -50, -45],
        &[31006, -33152, 153, 142, 133, 121, 115, 106, 97, 92, 84, 80, 72, 68, 63, 58, 55, 50, 47, 44, 40, 37, 36, 31, 31, 28, 31616, -29059, -181, -171, -157, -145, -137, -125, -118, -108, -101, -94, -87, -80, -76, -69, -66, -59, -56, -52, -48, -45, -41, -39, -36, -33],
        &[31006, -33227, 161, 150, 139, 129, 119, 111, 103, 95, 88, 82, 76, 70, 66, 60, 56, 53, 47, 45, 42, 39, 35, 33, 31616, -30061, -113, -104, -98, -90, -84, -77, -72, -67, -62, -57, -53, -50, -45, -42, -40, -36, -34, -32, -28, -28, -24, -24],
        &[31006, -33175, 160, 150, 137, 128, 118, 109, 102, 93, 87, 81, 74, 69, 64, 59, 54, 51, 47, 44, 40, 37, 34, 31616, -30826, -59, -55, -49, -47, -42, -41, -36, -35, -31, -30, -26, -26, -23, -21, -20, -19, -17, -15, -15, -14, -12],
        &[31006, -33132, 160, 149, 137, 127, 117, 109, 100, 92, 86, 79, 74, 67, 63, 57, 54, 50, 45, 43, 38, 37, 33, 31, 31616, -31241, -29, -25, -25, -22, -21, -19, -17, -17, -15, -14, -13, -12, -11, -10, -10, -8, -8, -8, -7, -6, -5, -7],
        &[31006, -33080, 159, 147, 136, 126, 115, 108, 98, 91, 84, 78, 71, 67, 61, 56, 52, 48, 45, 41, 37, 35, 32, 30, 31616, -31616, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -33190, 183, 167, 155, 140, 128, 119, 109, 98, 91, 84, 76, 70, 63, 60, 53, 49, 46, 41, 37, 36, 31, 31616, -31904, 25, 22, 19, 20, 16, 16, 14, 13, 13, 10, 10, 9, 9, 8, 6, 7, 6, 6, 4, 5, 5],
        &[31006, -33283, 207, 187, 171, 155, 141, 128, 117, 106, 97, 88, 79, 73, 66, 59, 56, 49, 45, 41, 38, 33, 31616, -32226, 55, 51, 45, 42, 37, 35, 32, 27, 27, 23, 21, 20, 18, 15, 16, 12, 13, 11, 9, 10],
        &[31006, -33370, 230, 207, 189, 169, 153, 137, 126, 111, 102, 92, 82, 75, 67, 61, 55, 50, 44, 40, 31616, -32547, 90, 82, 75, 65, 62, 53, 50, 43, 41, 36, 32, 30, 26, 25, 20, 21, 17, 16],
        &[31006, -33440, 253, 228, 203, 182, 164, 146, 131, 117, 105, 95, 84, 76, 68, 60, 54, 49, 44, 31616, -32910, 134, 122, 107, 98, 86, 78, 70, 62, 56, 50, 45, 40, 37, 31, 30, 25, 23],
        &[31006, -33566, 290, 257, 227, 202, 180, 158, 141, 125, 110, 99, 88, 76, 69, 61, 54, 48, 31616, -33278, 188, 166, 148, 132, 116, 102, 93, 80, 73, 63, 57, 50, 45, 39, 36, 30],
        &[31006, -33670, 324, 285, 251, 220, 193, 170, 148, 132, 114, 100, 90, 77, 68, 61, 51, 31616, -33698, 254, 223, 196, 171, 151, 133, 116, 102, 90, 79, 69, 60, 54, 47, 41],
        &[31006, -33753, 360, 311, 271, 236, 206, 177, 155, 135, 117, 101, 90, 76, 67, 58, 31616, -34177, 334, 291, 254, 219, 191, 166, 145, 125, 110, 94, 83, 72, 62, 54],
        &[31006, -33808, 390, 336, 289, 250, 213, 185, 158, 137, 118, 100, 88, 75, 31616, -34728, 433, 374, 320, 277, 238, 205, 176, 152, 130, 113, 96, 83],
        &[31006, -33457, 325, 283, 244, 213, 184, 159, 139, 120, 31616, -35183, 474, 411, 356, 309, 268, 232, 202, 174],
        &[31006, -32934, 243, 212, 187, 162, 142, 124, 109, 31616, -35401, 478, 418, 365, 318, 279, 243, 213],
        &[31006, -32006, 121, 104, 93, 82, 71, 64, 56, 48, 44, 38, 31616, -34786, 379, 334, 295, 258, 228, 201, 176, 156, 137, 120],
        &[31006, -31388, 43, 38, 35, 29, 27, 24, 21, 19, 16, 15, 13, 12, 9, 10, 8, 31616, -34335, 307, 273, 242, 215, 189, 170, 149, 133, 117, 105, 93, 82, 72, 65, 58],
        &[31006, -30765, -26, -23, -21, -18, -16, -16, -12, -12, -11, -9, -8, -7, -8, -5, -5, -5, -5, -3, -3, -3, -3, -3, 31616, -33910, 247, 221, 196, 176, 157, 139, 125, 112, 98, 90, 78, 71, 63, 56, 50, 45, 39, 36, 33, 27, 25, 24],
        &[31006, -30298, -73, -64, -59, -53, -46, -43, -37, -35, -30, -28, -24, -22, -20, -18, -16, -14, -14, -10, -11, -10, -7, -9, -6, 31616, -33561, 199, 179, 160, 145, 128, 117, 103, 95, 83, 75, 68, 61, 55, 48, 44, 39, 36, 32, 28, 26, 22, 21, 19],
        &[31006, -29827, -115, -102, -94, -84, -76, -69, -62, -55, -52, -45, -41, -37, -34, -30, -28, -25, -21, -21, -19, -15, -16, -13, 31616, -33209, 154, 140, 126, 113, 104, 92, 84, 75, 69, 62, 55, 50, 46, 41, 37, 34, 29, 28, 25, 22, 20, 18],
        &[31006, -29358, -151, -138, -123, -114, -102, -94, -85, -76, -71, -63, -58, -52, -48, -43, -40, -35, -33, -29, -27, -25, 31616, -32858, 114, 104, 93, 85, 78, 70, 64, 58, 52, 49, 43, 40, 35, 33, 30, 27, 24, 23, 19, 19],
        &[31006, -28715, -225, -201, -183, -165, -148, -135, -120, -109, -98, -89, -81, -71, -66, -58, -53, -48, -44, 31616, -32684, 104, 95, 85, 76, 70, 62, 57, 50, 46, 42, 37, 33, 31, 28, 24, 22, 21],
    ],
    // V = 6.0
    &[
        &[31006, -28177, -258, -235, -212, -194, -175, -160, -146, -132, -120, -108, 31616, -32269, 59, 55, 49, 44, 41, 37, 33, 31, 28, 24],
        &[31006, -27528, -336, -303, -275, -247, -224, -203, -182, -165, 31616, -32074, 44, 41, 35, 33, 30, 26, 24, 22],
        &[31006, -27052, -404, -362, -325, -293, -262, -236, -211, -191, 31616, -31754, 14, 13, 11, 10, 9, 9, 7, 7],
        &[31006, -27063, -438, -389, -346, -308, -272, -244, -216, -192, -171, -152, -134, -120, 31616, -31409, -24, -19, -19, -16, -14, -13, -12, -9, -9, -9, -6, -7],
        &[31006, -27078, -472, -413, -365, -321, -283, -248, -219, -193, -169, -149, -132, -115, -102, -89, -80, -68, -62, -53, -48, -41, -37, -32, 31616, -31064, -66, -59, -50, -46, -39, -36, -30, -27, -24, -21, -19, -15, -15, -13, -11, -9, -9, -8, -6, -6, -5, -5],
        &[31006, -27298, -477, -416, -361, -317, -274, -239, -209, -183, -158, -137, -122, -104, -92, -79, -69, -62, -51, -47, -40, -35, 31616, -30518, -141, -123, -107, -94, -81, -71, -62, -54, -47, -40, -37, -30, -28, -23, -20, -19, -15, -14, -12, -10],
        &[31006, -27508, -480, -415, -356, -310, -265, -229, -199, -170, -148, -127, -109, -95, -82, -70, -61, -53, -44, -40, -33, 31616, -29985, -224, -193, -166, -145, -123, -107, -93, -79, -69, -60, -50, -45, -37, -34, -28, -24, -22, -17, -17],
        &[31006, -27242, -607, -509, -428, -357, -301, -251, -212, -178, -147, -126, -104, -88, -73, -62, -52, -44, 31616, -29354, -366, -305, -256, -216, -180, -152, -127, -106, -89, -76, -62, -53, -44, -37, -31, -27],
        &[31006, -27073, -727, -591, -483, -393, -322, -261, -213, -175, -141, -116, -95, -76, -63, 31616, -28652, -548, -446, -363, -297, -242, -197, -161, -131, -106, -88, -71, -58, -48],
        &[31006, -26966, -837, -664, -527, -417, -330, -263, -207, -165, -131, -103, -82, 31616, -27914, -767, -609, -482, -382, -303, -241, -190, -150, -121, -94, -76],
        &[31006, -26949, -930, -717, -553, -426, -328, -253, -195, -151, -115, -89, 31616, -27110, -1033, -797, -613, -474, -364, -281, -217, -166, -129, -99],
        &[31006, -27598, -725, -569, -450, -353, -279, -219, -172, -137, -107, -84, -67, 31616, -27094, -961, -756, -596, -470, -369, -291, -229, -181, -142, -112, -88],
        &[31006, -28206, -546, -441, -353, -285, -229, -185, -149, -119, -96, -78, -62, -50, 31616, -27135, -875, -703, -567, -456, -366, -296, -238, -191, -154, -124, -100, -80],
        &[31006, -28902, -374, -306, -254, -207, -171, -140, -116, -96, -77, -65, -53, -43, -36, -30, 31616, -27104, -801, -659, -541, -446, -367, -301, -248, -204, -167, -139, -113, -93, -78, -62],
        &[31006, -29551, -231, -196, -164, -137, -117, -96, -83, -68, -58, -49, -41, -34, -28, -26, -19, -18, 31616, -27137, -714, -600, -505, -424, -357, -299, -252, -212, -178, -149, -126, -106, -89, -74, -63, -53],
        &[31006, -30384, -85, -73, -63, -54, -48, -41, -34, -31, -27, -22, -19, -18, -14, -13, -11, -9, -8, -8, -5, 31616, -27191, -602, -520, -450, -389, -335, -289, -251, -217, -186, -162, -139, -120, -105, -90, -77, -67, -58, -51, -42],
        &[31006, -31155, 17, 14, 14, 11, 11, 9, 8, 8, 6, 5, 6, 4, 5, 2, 4, 3, 2, 3, 1, 3, 0, 2, 2, 0, 31616, -27348, -479, -424, -379, -334, -297, -265, -234, -209, -184, -164, -146, -130, -114, -102, -90, -81, -72, -62, -57, -50, -44, -40, -34, -31],
        &[31006, -32708, 150, 135, 124, 114, 103, 94, 86, 78, 72, 65, 60, 55, 48, 47, 40, 38, 35, 31, 28, 27, 24, 21, 20, 18, 31616, -27183, -388, -355, -322, -296, -268, -246, -224, -204, -186, -171, -155, -142, -129, -117, -109, -97, -91, -81, -74, -69, -62, -56, -52, -47],
        &[31006, -32879, 117, 109, 103, 96, 90, 85, 78, 75, 70, 65, 62, 57, 54, 50, 48, 44, 42, 39, 37, 34, 31616, -29384, -139, -131, -121, -116, -106, -101, -95, -89, -82, -78, -74, -68, -64, -60, -57, -53, -49, -48, -42, -42],
        &[31006, -32944, 122, 116, 108, 100, 96, 88, 83, 77, 74, 68, 63, 61, 55, 53, 49, 46, 43, 41, 31616, -30259, -85, -82, -75, -71, -66, -62, -58, -55, -51, -47, -45, -42, -39, -37, -35, -31, -31, -28],
        &[31006, -32899, 122, 115, 106, 101, 94, 88, 81, 77, 72, 67, 63, 58, 55, 52, 47, 46, 42, 38, 38, 31616, -30927, -44, -43, -38, -36, -35, -32, -29, -29, -25, -25, -23, -21, -20, -19, -17, -17, -15, -14, -13],
        &[31006, -32862, 123, 113, 108, 99, 93, 87, 82, 75, 71, 67, 61, 58, 54, 51, 46, 45, 40, 39, 36, 31616, -31289, -21, -21, -18, -18, -16, -16, -14, -13, -13, -11, -12, -9, -10, -9, -9, -7, -7, -7, -7],
        &[31006, -32817, 122, 113, 105, 100, 91, 87, 79, 76, 68, 66, 61, 56, 53, 50, 45, 43, 40, 38, 34, 31616, -31616, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -32914, 141, 128, 120, 112, 102, 96, 88, 83, 75, 71, 65, 61, 55, 53, 48, 44, 42, 38, 31616, -31867, 18, 17, 16, 15, 13, 13, 12, 10, 10, 10, 8, 8, 7, 8, 5, 7, 5, 5],
        &[31006, -32995, 157, 145, 133, 124, 113, 104, 97, 87, 83, 74, 69, 64, 58, 54, 50, 46, 41, 31616, -32149, 42, 39, 36, 33, 30, 28, 26, 23, 22, 21, 18, 17, 15, 15, 14, 11, 12],
        &[31006, -33073, 176, 161, 148, 134, 123, 114, 102, 95, 86, 80, 71, 67, 60, 56, 50, 46, 31616, -32430, 69, 63, 59, 53, 48, 45, 40, 38, 33, 32, 28, 26, 24, 22, 20, 18],
        &[31006, -33135, 194, 176, 161, 145, 132, 121, 109, 100, 90, 82, 74, 69, 61, 56, 51, 31616, -32748, 103, 94, 85, 77, 71, 64, 58, 53, 48, 43, 41, 35, 33, 30, 27],
        &[31006, -33246, 221, 201, 179, 163, 145, 132, 119, 107, 96, 87, 78, 71, 63, 57, 31616, -33071, 144, 130, 117, 105, 95, 86, 76, 70, 63, 56, 51, 45, 42, 37],
        &[31006, -33339, 248, 223, 199, 178, 158, 142, 126, 113, 102, 89, 81, 72, 64, 58, 31616, -33439, 194, 175, 155, 138, 124, 111, 99, 88, 79, 71, 62, 57, 50, 44],
        &[31006, -33413, 276, 244, 215, 192, 170, 150, 132, 118, 104, 93, 31616, -33860, 256, 228, 202, 178, 158, 140, 123, 111, 96, 87],
        &[31006, -33463, 300, 263, 232, 203, 178, 156, 138, 31616, -34345, 334, 292, 256, 227, 197, 174, 153],
        &[31006, -33154, 249, 222, 195, 172, 153, 31616, -34742, 364, 321, 285, 250, 223],
        &[31006, -32695, 186, 167, 147, 132, 117, 31616, -34932, 367, 327, 289, 259, 229],
        &[31006, -31881, 91, 83, 73, 66, 59, 52, 48, 31616, -34392, 291, 261, 232, 210, 186, 168, 149],
        &[31006, -31340, 32, 31, 26, 25, 21, 20, 18, 15, 15, 13, 31616, -33996, 236, 212, 191, 172, 156, 140, 125, 114, 103, 91],
        &[31006, -30795, -20, -18, -16, -15, -14, -11, -12, -9, -10, -7, -8, -7, -6, -5, -5, 31616, -33623, 189, 172, 154, 142, 126, 116, 105, 94, 85, 78, 71, 63, 58, 52, 48],
        &[31006, -30387, -55, -51, -46, -41, -39, -34, -32, -29, -26, -23, -23, -19, -18, -16, -16, -13, -12, 31616, -33317, 152, 139, 127, 114, 104, 97, 85, 80, 72, 65, 60, 54, 49, 46, 40, 38, 34],
        &[31006, -29975, -88, -80, -73, -67, -61, -56, -52, -47, -42, -40, -36, -33, -31, -26, -26, -24, 31616, -33009, 119, 107, 99, 91, 83, 75, 70, 63, 59, 52, 50, 44, 40, 38, 35, 30],
        &[31006, -29566, -115, -107, -96, -91, -82, -76, -69, -65, -60, -53, -51, -45, -43, -39, -36, 31616, -32701, 87, 79, 74, 68, 62, 57, 53, 48, 44, 42, 37, 35, 32, 30, 26],
        &[31006, -29003, -172, -156, -144, -131, -119, -110, -100, -92, -84, -76, -70, -65, 31616, -32550, 80, 73, 67, 61, 56, 51, 47, 42, 40, 35, 33, 29],
    ],
    // V = 7.0
    &[
        &[31006, -28488, -204, -188, -173, -157, -147, -133, -123, 31616, -32197, 47, 43, 40, 36, 34, 31, 29],
        &[31006, -27909, -266, -244, -222, -204, -186, -170, 31616, -32024, 36, 31, 30, 26, 25, 22],
        &[31006, -27484, -320, -292, -264, -240, -220, 31616, -31739, 11, 11, 8, 9, 8],
        &[31006, -27492, -348, -313, -282, -255, -228, -208, -185, 31616, -31432, -18, -16, -16, -12, -13, -10, -11],
        &[31006, -27504, -374, -334, -299, -266, -239, -213, -189, -170, -152, 31616, -31124, -52, -48, -41, -38, -33, -30, -27, -24, -21],
        &[31006, -27698, -379, -337, -297, -263, -233, -207, -182, -163, -142, -127, -112, -100, -87, -79, -68, -61, -54, -49, -41, -38, -33, -29, -27, 31616, -30636, -113, -99, -88, -78, -69, -62, -53, -48, -43, -37, -34, -29, -26, -23, -21, -17, -17, -13, -14, -10, -10, -9, -8],
        &[31006, -27883, -383, -336, -294, -259, -227, -199, -174, -153, -135, -119, -102, -91, -81, -69, -61, -54, -48, -41, -36, -33, -27, 31616, -30160, -178, -157, -137, -121, -106, -92, -82, -71, -63, -55, -48, -43, -37, -32, -29, -25, -22, -20, -16, -16, -12],
        &[31006, -27641, -485, -415, -356, -304, -260, -222, -192, -162, -141, -118, -103, -88, -74, -65, -54, -47, -41, -34, 31616, -29594, -292, -249, -213, -183, -157, -134, -114, -98, -84, -72, -61, -53, -45, -38, -33, -29, -24, -20],
        &[31006, -27484, -583, -486, -405, -338, -283, -236, -197, -164, -138, -114, -95, -80, -67, -56, -45, 31616, -28962, -439, -366, -306, -255, -213, -177, -149, -124, -103, -86, -73, -59, -51, -42, -34],
        &[31006, -27383, -673, -549, -446, -364, -295, -241, -197, -159, -130, -105, -87, -70, -57, 31616, -28296, -617, -503, -408, -334, -271, -220, -181, -145, -120, -96, -80, -63, -53],
        &[31006, -27362, -750, -597, -473, -375, -299, -237, -188, -150, -117, -96, -73, 31616, -27569, -833, -663, -525, -417, -332, -263, -209, -165, -133, -103, -84],
        &[31006, -27949, -583, -471, -382, -309, -250, -202, -165, -131, -109, -86, -70, -57, -46, 31616, -27559, -774, -625, -507, -410, -331, -270, -216, -177, -142, -115, -94, -75, -62],
        &[31006, -28497, -439, -362, -298, -247, -204, -167, -138, -115, -95, -77, -64, -53, -44, -36, 31616, -27601, -702, -579, -478, -395, -326, -267, -223, -182, -151, -125, -102, -86, -69, -57],
        &[31006, -29123, -299, -252, -211, -178, -151, -125, -106, -89, -75, -63, -53, -45, -37, -32, -27, -22, 31616, -27578, -641, -540, -454, -381, -322, -270, -227, -191, -161, -135, -114, -95, -81, -68, -56, -49],
        &[31006, -29705, -185, -160, -136, -116, -101, -86, -74, -62, -55, -47, -39, -35, -28, -26, -22, -18, -15, -15, 31616, -27612, -570, -490, -420, -359, -309, -265, -226, -195, -167, -142, -123, -106, -90, -76, -68, -56, -48, -43],
        &[31006, -30451, -67, -60, -51, -47, -39, -36, -31, -27, -24, -21, -18, -17, -14, -13, -10, -10, -9, -7, -7, -5, -5, -5, 31616, -27666, -479, -423, -370, -325, -286, -252, -220, -193, -171, -150, -131, -116, -100, -90, -79, -68, -60, -53, -48, -40, -35, -33],
        &[31006, -31139, 14, 11, 11, 10, 9, 7, 7, 7, 6, 4, 6, 3, 4, 4, 3, 2, 3, 2, 2, 2, 1, 2, 1, 2, 31616, -27812, -380, -343, -307, -278, -250, -224, -202, -182, -164, -147, -133, -119, -108, -97, -86, -79, -70, -64, -57, -51, -47, -41, -38, -33],
        &[31006, -32520, 117, 110, 100, 92, 85, 80, 71, 68, 61, 57, 53, 48, 44, 42, 37, 36, 31, 31, 31616, -27671, -307, -284, -261, -241, -223, -204, -189, -175, -160, -148, -136, -127, -116, -106, -100, -91, -83, -78],
        &[31006, -32670, 92, 87, 82, 78, 73, 69, 66, 61, 59, 55, 52, 49, 47, 44, 41, 31616, -29633, -109, -105, -97, -92, -88, -83, -77, -74, -70, -65, -63, -58, -55, -53, -49],
        &[31006, -32729, 98, 91, 87, 81, 77, 73, 69, 64, 62, 57, 54, 52, 48, 46, 42, 31616, -30410, -68, -64, -60, -58, -54, -50, -49, -45, -42, -41, -38, -36, -34, -32, -30],
        &[31006, -32689, 97, 92, 85, 81, 77, 71, 68, 65, 59, 57, 54, 50, 48, 44, 43, 31616, -31004, -34, -34, -32, -28, -29, -25, -26, -22, -23, -20, -20, -18, -17, -17, -15],
        &[31006, -32655, 96, 91, 86, 80, 76, 72, 67, 63, 60, 56, 53, 50, 46, 44, 42, 40, 31616, -31325, -17, -17, -14, -14, -14, -13, -11, -12, -10, -10, -9, -9, -8, -9, -6, -7],
        &[31006, -32616, 97, 89, 86, 79, 76, 70, 67, 62, 58, 56, 52, 48, 47, 42, 42, 37, 31616, -31616, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -32702, 110, 104, 95, 91, 85, 78, 74, 69, 64, 60, 57, 53, 48, 47, 43, 31616, -31839, 14, 14, 12, 13, 10, 11, 10, 8, 9, 8, 8, 6, 7, 6, 6],
        &[31006, -32776, 125, 116, 108, 99, 94, 87, 79, 76, 69, 64, 61, 55, 53, 47, 46, 31616, -32090, 33, 31, 29, 27, 25, 23, 22, 20, 18, 18, 15, 16, 13, 14, 11],
        &[31006, -32845, 139, 129, 119, 110, 102, 93, 88, 80, 74, 69, 63, 58, 55, 50, 31616, -32341, 56, 50, 47, 43, 41, 36, 35, 31, 30, 27, 24, 24, 21, 19],
        &[31006, -32901, 153, 142, 130, 119, 109, 101, 93, 84, 79, 72, 65, 61, 56, 31616, -32624, 82, 76, 68, 63, 59, 53, 50, 45, 41, 39, 34, 33, 29],
        &[31006, -33001, 176, 160, 146, 134, 121, 111, 102, 91, 84, 31616, -32912, 115, 104, 94, 88, 78, 72, 66, 60, 54],
        &[31006, -33085, 198, 178, 163, 146, 133, 119, 109, 31616, -33240, 154, 140, 126, 115, 104, 93, 85],
        &[31006, -33152, 220, 196, 177, 158, 142, 31616, -33617, 205, 183, 164, 148, 133],
        &[31006, -33197, 238, 213, 190, 168, 31616, -34050, 266, 235, 211, 188],
        &[31006, -32921, 198, 179, 159, 31616, -34403, 289, 260, 232],
        &[31006, -32512, 149, 134, 120, 31616, -34571, 291, 263, 237],
        &[31006, -31786, 73, 66, 60, 55, 48, 31616, -34089, 231, 209, 190, 172, 157],
        &[31006, -31304, 27, 23, 22, 20, 18, 17, 15, 31616, -33735, 186, 171, 155, 142, 128, 119, 107],
        &[31006, -30818, -16, -15, -12, -13, -11, -10, -9, -9, -8, -6, 31616, -33403, 150, 138, 125, 116, 105, 97, 88, 82, 74, 68],
        &[31006, -30455, -44, -40, -38, -33, -32, -30, -26, -24, -23, -21, -19, -17, 31616, -33130, 121, 110, 103, 94, 87, 79, 73, 68, 62, 57, 53, 48],
        &[31006, -30089, -69, -64, -60, -53, -52, -46, -43, -41, -36, -35, -31, 31616, -32855, 93, 87, 79, 75, 67, 64, 59, 53, 50, 46, 43],
        &[31006, -29725, -91, -85, -79, -73, -67, -64, -58, -54, -51, -47, -43, 31616, -32581, 68, 65, 58, 56, 50, 49, 43, 41, 39, 34, 34],
        &[31006, -29224, -135, -126, -116, -107, -98, -92, -85, -77, -72, 31616, -32447, 63, 59, 54, 49, 47, 42, 40, 36, 33],
    ],
    // V = 8.0
    &[
        &[31006, -28734, -167, -154, -142, -133, 31616, -32140, 37, 37, 32, 31],
        &[31006, -28211, -217, -200, -185, 31616, -31984, 29, 26, 24],
        &[31006, -27827, -261, -239, -220, 31616, -31727, 9, 9, 7],
        &[31006, -27833, -283, -259, -234, 31616, -31450, -14, -14, -13],
        &[31006, -27842, -305, -277, -249, -225, 31616, -31171, -44, -38, -35, -31],
        &[31006, -28016, -310, -278, -249, -224, -199, -180, 31616, -30730, -93, -81, -74, -67, -58, -54],
        &[31006, -28183, -312, -278, -248, -220, -195, -175, -153, -139, -121, -110, -96, -86, 31616, -30299, -147, -129, -115, -103, -91, -81, -72, -65, -56, -51, -45, -41],
        &[31006, -27959, -399, -344, -302, -261, -227, -198, -171, -150, -130, -113, -98, -85, -75, -64, -56, -49, -43, -36, -32, -29, 31616, -29785, -240, -207, -181, -157, -136, -119, -104, -89, -78, -68, -59, -51, -45, -39, -33, -30, -25, -22, -20, -17],
        &[31006, -27814, -478, -407, -346, -293, -251, -211, -182, -153, -130, -111, -95, -80, -68, -58, -49, -43, -35, 31616, -29211, -360, -306, -261, -222, -187, -161, -136, -116, -97, -85, -71, -60, -51, -44, -37, -32, -27],
        &[31006, -27718, -555, -461, -383, -319, -264, -221, -183, -152, -127, -105, -87, -73, -60, -51, -41, 31616, -28603, -509, -422, -351, -292, -243, -202, -167, -140, -116, -96, -80, -67, -55, -46, -39],
        &[31006, -27695, -620, -503, -410, -333, -270, -220, -179, -145, -118, -96, -78, -64, -51, 31616, -27939, -688, -559, -456, -368, -302, -243, -199, -161, -132, -106, -86, -71, -58],
        &[31006, -28231, -480, -398, -327, -272, -225, -185, -154, -127, -105, -86, -73, -59, -49, -41, 31616, -27934, -636, -528, -435, -361, -297, -247, -204, -168, -140, -115, -95, -79, -66, -53],
        &[31006, -28731, -360, -304, -256, -214, -182, -151, -129, -107, -91, -77, -63, -55, -45, -38, -32, -28, 31616, -27975, -577, -486, -409, -344, -289, -244, -205, -172, -145, -123, -102, -86, -73, -62, -51, -43],
        &[31006, -29300, -245, -211, -179, -155, -132, -112, -97, -83, -71, -60, -53, -43, -39, -32, -29, -23, -20, -18, 31616, -27957, -527, -450, -387, -330, -283, -242, -207, -178, -151, -131, -111, -95, -82, -69, -61, -50, -45, -37],
        &[31006, -29828, -152, -133, -115, -100, -88, -76, -66, -58, -50, -44, -39, -32, -30, -25, -21, -20, -17, -14, -12, -12, 31616, -27991, -468, -408, -354, -309, -269, -235, -204, -177, -156, -134, -118, -102, -90, -77, -67, -60, -51, -44, -39, -35],
        &[31006, -30504, -55, -49, -44, -39, -35, -30, -28, -24, -22, -19, -18, -14, -15, -11, -12, -9, -9, -7, -7, -6, -5, -5, -5, -3, 31616, -28044, -393, -349, -311, -277, -246, -219, -196, -173, -155, -138, -122, -109, -98, -85, -78, -68, -61, -55, -48, -42, -39, -34, -31, -26],
        &[31006, -31126, 11, 10, 8, 9, 7, 7, 7, 4, 6, 5, 3, 5, 3, 3, 3, 2, 3, 2, 3, 0, 3, 1, 1, 2, 31616, -28181, -309, -283, -257, -233, -213, -192, -177, -160, -145, -132, -121, -109, -100, -91, -82, -75, -69, -61, -57, -52, -46, -42, -40, -34],
        &[31006, -32372, 96, 89, 84, 76, 72, 67, 62, 57, 54, 50, 47, 31616, -28058, -249, -233, -217, -200, -187, -174, -162, -149, -140, -130, -121],
        &[31006, -32505, 74, 72, 67, 64, 61, 58, 54, 53, 50, 47, 31616, -29829, -90, -84, -80, -77, -72, -69, -66, -62, -59, -57],
        &[31006, -32558, 79, 74, 72, 67, 64, 61, 58, 54, 53, 48, 31616, -30529, -56, -52, -49, -48, -45, -42, -41, -38, -36, -35],
        &[31006, -32522, 78, 75, 71, 66, 64, 60, 57, 55, 50, 50, 45, 31616, -31064, -29, -27, -25, -25, -23, -22, -21, -19, -20, -16, -18],
        &[31006, -32492, 78, 74, 71, 67, 62, 61, 56, 54, 51, 47, 47, 31616, -31354, -14, -13, -12, -12, -11, -11, -9, -11, -8, -8, -9],
        &[31006, -32457, 79, 73, 70, 66, 63, 59, 56, 52, 51, 48, 44, 42, 31616, -31616, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -32535, 90, 84, 80, 74, 71, 66, 63, 58, 56, 51, 50, 45, 31616, -31817, 11, 12, 10, 10, 9, 9, 8, 8, 7, 7, 7, 5],
        &[31006, -32602, 102, 95, 88, 84, 78, 72, 69, 64, 60, 57, 51, 31616, -32044, 28, 25, 24, 22, 21, 20, 18, 17, 16, 15, 14],
        &[31006, -32665, 114, 105, 98, 93, 84, 81, 73, 70, 31616, -32269, 44, 42, 38, 37, 33, 32, 29, 27],
        &[31006, -32716, 126, 115, 108, 99, 93, 85, 31616, -32525, 66, 62, 58, 52, 49, 46],
        &[31006, -32807, 144, 132, 121, 111, 31616, -32785, 92, 87, 78, 73],
        &[31006, -32883, 161, 147, 136, 31616, -33083, 127, 114, 106],
        &[31006, -32944, 179, 162, 147, 31616, -33423, 166, 152, 137],
        &[31006, -32986, 195, 176, 31616, -33815, 216, 196],
        &[31006, -32736, 162, 147, 31616, -34133, 235, 215],
        &[31006, -32366, 122, 110, 31616, -34284, 237, 216],
        &[31006, -31710, 59, 55, 31616, -33849, 189, 172],
        &[31006, -31275, 22, 19, 18, 17, 31616, -33529, 153, 139, 129, 119],
        &[31006, -30837, -12, -12, -11, -11, -8, 31616, -33228, 121, 114, 104, 96, 90],
        &[31006, -30509, -36, -32, -32, -28, -27, -24, -23, 31616, -32982, 99, 90, 85, 79, 72, 69, 61],
        &[31006, -30179, -56, -53, -48, -46, -43, -39, -37, 31616, -32734, 77, 70, 66, 62, 57, 54, 49],
        &[31006, -29851, -74, -70, -64, -61, -57, -54, -49, 31616, -32486, 55, 53, 49, 45, 44, 39, 38],
        &[31006, -29399, -110, -103, -95, -90, -83, 31616, -32366, 52, 48, 45, 41, 39],
    ],
    // V = 9.0
    &[
        &[31006, -28935, -138, 31616, -32094, 32],
        &[31006, -28457, -181, 31616, -31952, 25],
        &[31006, -28106, -217, 31616, -31717, 7],
        &[31006, -28111, -235, 31616, -31464, -13],
        &[31006, -28118, -254, 31616, -31210, -36],
        &[31006, -28276, -258, -235, 31616, -30807, -77, -69],
        &[31006, -28427, -261, -234, -212, 31616, -30413, -122, -110, -98],
        &[31006, -28220, -333, -293, -258, 31616, -29942, -200, -176, -155],
        &[31006, -28085, -400, -346, -298, -258, 31616, -29415, -301, -261, -225, -194],
        &[31006, -27994, -465, -394, -333, -281, -238, -201, -170, 31616, -28856, -426, -362, -304, -257, -219, -184, -156],
        &[31006, -27970, -521, -432, -357, -296, -246, -203, -168, -140, -115, -96, -80, -65, -54, -46, 31616, -28244, -579, -479, -397, -330, -271, -227, -186, -156, -127, -107, -88, -73, -61, -49],
        &[31006, -28463, -404, -339, -285, -240, -202, -170, -144, -120, -101, -85, -72, -61, -50, -43, -36, -30, 31616, -28242, -535, -449, -380, -318, -269, -225, -190, -160, -134, -113, -96, -79, -69, -55, -49, -40],
        &[31006, -28923, -302, -258, -222, -189, -161, -139, -117, -101, -87, -73, -63, -54, -46, -39, -34, -29, -24, -22, 31616, -28282, -484, -414, -353, -303, -259, -220, -190, -160, -139, -118, -100, -87, -73, -64, -53, -46, -39, -35],
        &[31006, -29445, -205, -180, -154, -134, -118, -101, -88, -76, -67, -58, -50, -43, -38, -33, -28, -25, -22, -18, -16, -14, 31616, -28268, -442, -382, -332, -289, -251, -217, -189, -164, -143, -123, -108, -93, -81, -71, -60, -54, -45, -41, -34, -30],
        &[31006, -29929, -128, -111, -99, -87, -77, -68, -60, -53, -46, -41, -36, -32, -29, -24, -22, -20, -16, -16, -13, -11, -11, -9, 31616, -28302, -391, -345, -304, -268, -237, -209, -183, -163, -143, -127, -111, -98, -87, -76, -68, -59, -53, -46, -41, -35, -33, -28],
        &[31006, -30548, -45, -42, -37, -34, -30, -26, -26, -21, -20, -18, -16, -14, -13, -11, -12, -8, -9, -8, -6, -7, 31616, -28354, -327, -294, -266, -238, -214, -194, -173, -156, -140, -127, -114, -102, -92, -82, -76, -66, -61, -53, -50, -43],
        &[31006, -31115, 8, 9, 7, 8, 5, 7, 5, 5, 5, 3, 5, 3, 3, 31616, -28481, -259, -236, -218, -199, -184, -168, -153, -143, -129, -119, -109, -101, -92],
        &[31006, -32251, 79, 76, 69, 65, 31616, -28372, -208, -194, -183, -170],
        &[31006, -32371, 61, 60, 56, 54, 52, 31616, -29989, -74, -70, -67, -65, -61],
        &[31006, -32420, 66, 63, 58, 58, 53, 31616, -30626, -46, -44, -41, -40, -38],
        &[31006, -32387, 65, 63, 58, 57, 54, 50, 31616, -31113, -25, -21, -22, -21, -19, -19],
        &[31006, -32360, 66, 61, 59, 56, 54, 51, 31616, -31377, -12, -11, -10, -10, -9, -10],
        &[31006, -32327, 64, 62, 59, 55, 53, 50, 48, 31616, -31616, 0, 0, 0, 0, 0, 0, 0],
        &[31006, -32399, 74, 71, 67, 63, 59, 31616, -31799, 9, 10, 8, 9, 8],
        &[31006, -32460, 84, 79, 75, 31616, -32006, 23, 21, 21],
        &[31006, -32518, 94, 88, 31616, -32212, 38, 34],
        &[31006, -32565, 104, 31616, -32445, 56],
        &[31006, -32648, 119, 31616, -32682, 77],
        &[31006, -32719, 135, 31616, -32954, 105],
        &[31006, -32774, 31616, -33265],
        &[31006, -32813, 31616, -33623],
        &[31006, -32585, 31616, -33913],
        &[31006, -32247, 31616, -34051],
        &[31006, -31648, 31616, -33653],
        &[31006, -31251, 17, 31616, -33360, 126],
        &[31006, -30851, -12, -9, 31616, -33086, 101, 95],
        &[31006, -30553, -29, -29, 31616, -32861, 81, 77],
        &[31006, -30252, -47, -44, -41, 31616, -32635, 64, 58, 56],
        &[31006, -29953, -63, -56, 31616, -32409, 46, 44],
        &[31006, -29541, -91, -87, 31616, -32299, 42, 41],
    ],
    // V = 10.0
    &[
        &[31006, -29101, 31616, -32056],
        &[31006, -28662, 31616, -31925],
        &[31006, -28338, 31616, -31709],
        &[31006, -28342, 31616, -31476],
        &[31006, -28348, 31616, -31242],
        &[31006, -28492, 31616, -30871],
        &[31006, -28631, 31616, -30508],
        &[31006, -28439, 31616, -30073],
        &[31006, -28311, 31616, -29585],
        &[31006, -28225, 31616, -29068],
        &[31006, -28201, 31616, -28501],
        &[31006, -28658, -344, 31616, -28500, -457],
        &[31006, -29083, -259, -222, -193, -168, -144, 31616, -28539, -413, -356, -310, -268, -231],
        &[31006, -29566, -176, -152, -136, -119, -103, -92, -80, -72, -61, -54, -49, 31616, -28529, -374, -330, -290, -254, -223, -196, -173, -151, -134, -116, -103],
        &[31006, -30014, -107, -97, -85, -77, -68, -60, 31616, -28562, -332, -295, -265, -235, -209, -187],
        &[31006, -30584, -39, -35, 31616, -28612, -277, -252],
        &[31006, -31107, 8, 31616, -28731, -219],
        &[31006, -32151, 31616, -28633],
        &[31006, -32260, 31616, -30121],
        &[31006, -32305, 31616, -30707],
        &[31006, -32275, 31616, -31154],
        &[31006, -32250, 31616, -31397],
        &[31006, -32220, 31616, -31616],
        &[31006, -32286, 31616, -31785],
        &[31006, -32343, 31616, -31974],
        &[31006, -32396, 31616, -32164],
        &[31006, -32439, 31616, -32378],
        &[31006, -32516, 31616, -32597],
        &[31006, -32582, 31616, -32847],
        &[31006, -32633, 31616, -33134],
        &[31006, -32670, 31616, -33464],
        &[31006, -32459, 31616, -33730],
        &[31006, -32148, 31616, -33856],
        &[31006, -31597, 31616, -33490],
        &[31006, -31232, 31616, -33221],
        &[31006, -30864, 31616, -32968],
        &[31006, -30589, 31616, -32761],
        &[31006, -30313, 31616, -32553],
        &[31006, -30038, 31616, -32345],
        &[31006, -29659, 31616, -32244],
    ],
];
